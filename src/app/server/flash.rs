use axum_extra::extract::{cookie::Cookie, PrivateCookieJar};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Name of the cookie holding the pending flash message.
pub const FLASH_COOKIE: &str = "roster_flash";

/// A notification shown once, on the page rendered after a redirect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Flash {
    pub success: Option<String>,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
        }
    }
}

/// Store `flash` in the jar, replacing any pending one.
pub fn put(jar: PrivateCookieJar, flash: &Flash) -> PrivateCookieJar {
    let value = match serde_json::to_string(flash) {
        Ok(value) => value,
        Err(e) => {
            warn!("Unable to serialize flash: {e}");
            return jar;
        }
    };

    let cookie = Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true);

    jar.add(cookie)
}

/// Remove the pending flash from the jar and return it.
pub fn take(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let flash = match serde_json::from_str(cookie.value()) {
        Ok(flash) => Some(flash),
        Err(e) => {
            warn!("Discarding malformed flash: {e}");
            None
        }
    };

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flash)
}

#[cfg(test)]
mod tests {
    use super::{put, take, Flash, FLASH_COOKIE};
    use axum_extra::extract::{
        cookie::{Cookie, Key},
        PrivateCookieJar,
    };

    #[test]
    fn flash_is_taken_once() {
        let jar = PrivateCookieJar::new(Key::generate());

        let jar = put(jar, &Flash::success("Company created successfully."));

        let (jar, flash) = take(jar);
        assert_eq!(
            Some(Flash::success("Company created successfully.")),
            flash
        );

        let (_, flash) = take(jar);
        assert_eq!(None, flash);
    }

    #[test]
    fn malformed_flash_is_discarded() {
        let jar = PrivateCookieJar::new(Key::generate());
        let jar = jar.add(Cookie::new(FLASH_COOKIE, "not json"));

        let (jar, flash) = take(jar);
        assert_eq!(None, flash);
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn newer_flash_replaces_pending() {
        let jar = PrivateCookieJar::new(Key::generate());
        let jar = put(jar, &Flash::success("first"));
        let jar = put(jar, &Flash::success("second"));

        let (_, flash) = take(jar);
        assert_eq!(Some(Flash::success("second")), flash);
    }
}
