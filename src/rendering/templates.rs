//! HTML templates for the map page, the error page and marker popups.
//!
//! Template names end in `.html`, so minijinja escapes every interpolated
//! value unless it is marked `|safe`.

use crate::Result;
use minijinja::Environment;
use once_cell::sync::OnceCell;
use serde::Serialize;

static BASE_TMPL: &str = include_str!("./templates/base.html.jinja");
static PAGE_TMPL: &str = include_str!("./templates/page.html.jinja");
static ERROR_TMPL: &str = include_str!("./templates/error.html.jinja");
static POPUP_TMPL: &str = include_str!("./templates/popup.html.jinja");

pub(crate) const PAGE: &str = "page.html";
pub(crate) const ERROR_PAGE: &str = "error.html";
pub(crate) const POPUP: &str = "popup.html";

static ENVIRONMENT: OnceCell<Environment<'static>> = OnceCell::new();

fn environment() -> Result<&'static Environment<'static>> {
    ENVIRONMENT.get_or_try_init(|| -> Result<Environment<'static>> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TMPL)?;
        env.add_template(PAGE, PAGE_TMPL)?;
        env.add_template(ERROR_PAGE, ERROR_TMPL)?;
        env.add_template(POPUP, POPUP_TMPL)?;
        Ok(env)
    })
}

/// Renders the named template with `ctx`
pub(crate) fn render<S: Serialize>(name: &str, ctx: S) -> Result<String> {
    let template = environment()?.get_template(name)?;
    Ok(template.render(ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_values_are_html_escaped() {
        let html = render(
            ERROR_PAGE,
            context! {
                title => "Quakes & <Faults>",
                message => "\"bad\"",
                leaflet_version => "1.9.4",
            },
        )
        .unwrap();
        assert!(html.contains("<title>Quakes &amp; &lt;Faults&gt;</title>"));
        assert!(html.contains("&quot;bad&quot;"));
    }

    #[test]
    fn test_popup_time_line_is_optional() {
        let without = render(
            POPUP,
            context! { place => "Offshore", magnitude => "5", depth => "100", time => () },
        )
        .unwrap();
        assert_eq!(without, "<h3> Offshore</h3><hr>\n<p>Magnitude: 5</p>\n<p>Depth: 100</p>");

        let with = render(
            POPUP,
            context! { place => "Offshore", magnitude => "5", depth => "100", time => "then" },
        )
        .unwrap();
        assert!(with.ends_with("<p>Depth: 100</p>\n<p>Time: then</p>"));
    }

    #[test]
    fn test_unknown_template() {
        assert!(render("missing.html", context! {}).is_err());
    }
}
