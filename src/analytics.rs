//! Consent-gated Google tag emission.
//!
//! Script markup is decided once at page-load time from the stored
//! preferences. Flipping a flag afterwards does not retract markup that
//! already shipped; the next page load picks up the change.

use crate::consent::ConsentPreferences;

/// Render the Google tag loader + config snippet, or `None` when consent
/// or configuration rules it out.
///
/// The analytics flag gates the whole snippet; the ads config line
/// additionally requires the marketing flag.
pub fn script_tags(
    prefs: &ConsentPreferences,
    ga4_id: Option<&str>,
    ads_id: Option<&str>,
) -> Option<String> {
    if !prefs.analytics {
        return None;
    }

    let ads_id = ads_id.filter(|_| prefs.marketing);
    let load_id = ads_id.or(ga4_id)?;

    let mut config_lines = String::new();
    if let Some(id) = ads_id {
        config_lines.push_str(&format!("gtag('config', '{}');\n", id));
    }
    if let Some(id) = ga4_id {
        config_lines.push_str(&format!("gtag('config', '{}');\n", id));
    }

    Some(format!(
        "<script async src=\"https://www.googletagmanager.com/gtag/js?id={}\"></script>\n\
         <script>\n\
         window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         {}</script>",
        load_id, config_lines,
    ))
}
