/// Client-side routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Gallery,
    Form,
    NotFound,
}

impl Route {
    /// Map a location path (with or without trailing slash) to a route.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Gallery,
            "/form" => Route::Form,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Gallery => "/",
            Route::Form => "/form",
            Route::NotFound => "/404",
        }
    }
}
