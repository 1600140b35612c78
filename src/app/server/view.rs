use super::flash::Flash;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A rendered page. Serialized as `{ component, props, url }` where `props`
/// holds the page data along with the pending flash message.
#[derive(Debug, Serialize)]
pub struct Page<P> {
    /// The view component rendering the props.
    pub component: &'static str,

    pub props: Props<P>,

    /// The URL the page was requested at.
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Props<P> {
    #[serde(flatten)]
    pub data: P,

    pub flash: Option<Flash>,
}

/// Props for pages without data.
#[derive(Debug, Default, Serialize)]
pub struct NoProps {}

impl<P> Page<P>
where
    P: Serialize,
{
    pub fn new(component: &'static str, url: impl Into<String>, data: P) -> Self {
        Self {
            component,
            props: Props { data, flash: None },
            url: url.into(),
        }
    }

    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.props.flash = flash;
        self
    }
}

impl<P> IntoResponse for Page<P>
where
    P: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::{NoProps, Page};
    use crate::app::server::flash::Flash;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Data {
        name: &'static str,
    }

    #[test]
    fn props_are_flattened_next_to_flash() {
        let page = Page::new("Companies/Show", "/companies/1", Data { name: "Acme" })
            .with_flash(Some(Flash::success("Company updated successfully.")));

        let json = serde_json::to_value(&page).unwrap();

        assert_eq!("Companies/Show", json["component"]);
        assert_eq!("/companies/1", json["url"]);
        assert_eq!("Acme", json["props"]["name"]);
        assert_eq!(
            "Company updated successfully.",
            json["props"]["flash"]["success"]
        );
    }

    #[test]
    fn empty_props_only_hold_flash() {
        let page = Page::new("Companies/Create", "/companies/create", NoProps {});
        let json = serde_json::to_value(&page).unwrap();
        let props = json["props"].as_object().unwrap();
        assert_eq!(1, props.len());
        assert!(props["flash"].is_null());
    }
}
