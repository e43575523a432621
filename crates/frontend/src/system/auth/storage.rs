use web_sys::window;

const TOKEN_KEY: &str = "ferti_auth_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save the bearer token: localStorage when remembered, sessionStorage otherwise
pub fn save_token(token: &str, remember: bool) {
    clear_tokens();
    let storage = if remember {
        get_local_storage()
    } else {
        get_session_storage()
    };
    if let Some(storage) = storage {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Stored bearer token, session storage first
pub fn get_token() -> Option<String> {
    [get_session_storage(), get_local_storage()]
        .into_iter()
        .flatten()
        .find_map(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Remove the token from both storages
pub fn clear_tokens() {
    for storage in [get_local_storage(), get_session_storage()]
        .into_iter()
        .flatten()
    {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
