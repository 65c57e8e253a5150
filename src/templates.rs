use crate::error::GateError;
use axum::response::Html;
use handlebars::Handlebars;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "assets/templates"]
#[include = "*.hbs"]
struct TemplateAssets;

pub const LOGIN: &str = "login";
pub const REGIST: &str = "regist";
pub const HOME: &str = "home";
pub const PSERROR: &str = "pserror";

/// Embedded handlebars pages, shared across requests.
#[derive(Clone)]
pub struct Templates {
    registry: Arc<Handlebars<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self, GateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_embed_templates_with_extension::<TemplateAssets>(".hbs")?;
        Ok(Self {
            registry: Arc::new(handlebars),
        })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, GateError> {
        Ok(Html(self.registry.render(name, data)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_pages_are_embedded() {
        let templates = Templates::new().unwrap();
        for name in [LOGIN, REGIST, HOME, PSERROR] {
            assert!(templates.registry.has_template(name), "missing {name}");
        }
    }

    #[test]
    fn regist_shows_error_only_when_present() {
        let templates = Templates::new().unwrap();

        let Html(plain) = templates.render(REGIST, &json!({ "error": null })).unwrap();
        assert!(!plain.contains(r#"class="error""#));

        let Html(with_error) = templates
            .render(REGIST, &json!({ "error": "两次密码不相同！" }))
            .unwrap();
        assert!(with_error.contains("两次密码不相同！"));
    }

    #[test]
    fn home_escapes_username() {
        let templates = Templates::new().unwrap();
        let Html(page) = templates
            .render(HOME, &json!({ "username": "<b>eve</b>", "picname": null }))
            .unwrap();
        assert!(page.contains("&lt;b&gt;eve&lt;/b&gt;"));
        assert!(!page.contains("<img"));
    }
}
