//! Login state and anti-forgery tokens.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::patterns::{FORM_TOKEN, LOGIN_TOKEN, USER_AVATAR, USER_NAME, USER_RSS};
use crate::result::UserSession;
use crate::text;
use crate::Options;

use super::absolute;

/// Read the session widgets of any page.
///
/// Returns `None` when name, avatar, token and feed link are all missing,
/// which is what an anonymous page without a login form looks like.
#[must_use]
pub fn parse_session(doc: &Document, opts: &Options) -> Option<UserSession> {
    let name = text::non_empty(&dom::text(&doc.select(USER_NAME).first()));
    let avatar = text::non_empty(&dom::attr_trimmed(&doc.select(USER_AVATAR), "src"));
    let token = parse_login_token(doc);
    let rss = text::non_empty(&dom::attr_trimmed(&doc.select(USER_RSS), "href"));

    if name.is_none() && avatar.is_none() && token.is_none() && rss.is_none() {
        debug!("no session widgets on page");
        return None;
    }

    Some(UserSession {
        name,
        avatar: avatar.map(|src| absolute(opts, &src)),
        token,
        rss: rss.map(|href| absolute(opts, &href)),
    })
}

/// Token of the login form in the page header.
#[must_use]
pub fn parse_login_token(doc: &Document) -> Option<String> {
    text::non_empty(&dom::attr(&doc.select(LOGIN_TOKEN), "value"))
}

/// Token of the registration form.
#[must_use]
pub fn parse_register_token(doc: &Document) -> Option<String> {
    form_token(doc)
}

/// Token of the forgot-password form.
#[must_use]
pub fn parse_forgot_password_token(doc: &Document) -> Option<String> {
    form_token(doc)
}

fn form_token(doc: &Document) -> Option<String> {
    text::non_empty(&dom::attr(&doc.select(FORM_TOKEN), "value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_page_has_no_session() {
        let doc = dom::parse("<html><body><p>hello</p></body></html>");
        assert_eq!(parse_session(&doc, &Options::default()), None);
    }

    #[test]
    fn login_form_alone_yields_token_only_session() {
        let doc = dom::parse(
            r#"<form id="login"><input name="__RequestVerificationToken" value="tok-1"></form>"#,
        );
        let session = parse_session(&doc, &Options::default());

        assert_eq!(
            session,
            Some(UserSession {
                token: Some("tok-1".to_string()),
                ..UserSession::default()
            })
        );
    }

    #[test]
    fn signed_in_widgets() {
        let doc = dom::parse(
            r#"<div id="user-name"><div class="text-right"> kiri </div></div>
               <div id="user-welcome"><img id="head-pic" src="/images/avatar/kiri.png"></div>
               <div id="an-episode-updates"><a class="mikan-rss" href="/RSS/MyBangumi?token=x"></a></div>"#,
        );
        let session = parse_session(&doc, &Options::default()).unwrap_or_default();

        assert_eq!(session.name.as_deref(), Some("kiri"));
        assert_eq!(session.avatar.as_deref(), Some("https://mikanani.me/images/avatar/kiri.png"));
        assert_eq!(session.rss.as_deref(), Some("https://mikanani.me/RSS/MyBangumi?token=x"));
        assert_eq!(session.token, None);
    }

    #[test]
    fn form_tokens_are_unscoped() {
        let doc = dom::parse(
            r#"<form action="/Account/Register"><input name="__RequestVerificationToken" value="reg"></form>"#,
        );

        assert_eq!(parse_register_token(&doc).as_deref(), Some("reg"));
        assert_eq!(parse_forgot_password_token(&doc).as_deref(), Some("reg"));
        assert_eq!(parse_login_token(&doc), None);
    }
}
