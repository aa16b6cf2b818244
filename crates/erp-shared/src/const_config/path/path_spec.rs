use reqwest::Method;

/// An endpoint on the backend and the method it expects
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    /// Arguments for `GET` go in the query string, everything else sends a
    /// JSON body
    pub fn sends_args_as_query(&self) -> bool {
        self.method == Method::GET
    }

    /// Joins the path onto `base_url` without doubling up the separator
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}
