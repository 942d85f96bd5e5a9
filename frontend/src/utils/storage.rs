pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }
}

/// Reads the access token once; callers inject it into an `ApiClient`.
#[cfg(target_arch = "wasm32")]
pub fn read_access_token() -> Option<String> {
    let storage = match browser::local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("Cannot read access token: {}", err);
            return None;
        }
    };
    storage
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_access_token() -> Option<String> {
    None
}
