//! Site endpoint URLs and request bodies.
//!
//! The crate does no I/O. These builders give the host the exact URLs and
//! bodies whose responses the parsers understand.

use serde::Serialize;
use url::form_urlencoded;
use url::Url;

use crate::options::Options;
use crate::patterns::TOKEN_FIELD;
use crate::url_utils;

/// Rows requested from the expanded episode table by default.
pub const DEFAULT_TAKE: u32 = 65;

/// URL builder for one site mirror.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            base: options.base().to_string(),
        }
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let raw = format!("{}{path}", self.base);
        match Url::parse(&raw) {
            Ok(mut url) => {
                if !query.is_empty() {
                    url.query_pairs_mut().extend_pairs(query);
                }
                url.into()
            }
            Err(err) => {
                tracing::debug!(%err, url = %raw, "base URL does not parse; query dropped");
                raw
            }
        }
    }

    /// Home page, optionally for a given year and season label.
    ///
    /// The seasonal variant also serves the signed-in user's tiles for that
    /// season.
    #[must_use]
    pub fn index(&self, season: Option<(&str, &str)>) -> String {
        match season {
            Some((year, season)) => {
                self.url("/Home/BangumiCoverFlow", &[("year", year), ("seasonStr", season)])
            }
            None => self.url("/", &[]),
        }
    }

    /// Season grid fragment.
    #[must_use]
    pub fn season(&self, year: &str, season: &str) -> String {
        self.url("/Home/BangumiCoverFlowByDayOfWeek", &[("year", year), ("seasonStr", season)])
    }

    /// Daily feed between two day offsets.
    #[must_use]
    pub fn day(&self, predate: i32, enddate: i32) -> String {
        let (predate, enddate) = (predate.to_string(), enddate.to_string());
        self.url(
            "/Home/EpisodeUpdateRows",
            &[("predate", predate.as_str()), ("enddate", enddate.as_str())],
        )
    }

    /// OVA / special listing; the daily feed with no day window.
    #[must_use]
    pub fn ova(&self) -> String {
        self.day(-1, -1)
    }

    #[must_use]
    pub fn search(&self, keyword: &str, subgroup_id: Option<&str>, page: u32) -> String {
        let page = page.to_string();
        let mut query = vec![("searchstr", keyword), ("page", page.as_str())];
        if let Some(id) = subgroup_id {
            query.push(("subgroupid", id));
        }
        self.url("/Home/Search", &query)
    }

    #[must_use]
    pub fn classic_list(&self, page: u32) -> String {
        self.url(&format!("/Home/Classic/{page}"), &[])
    }

    #[must_use]
    pub fn publish_group(&self, id: &str) -> String {
        self.url(&format!("/Home/PublishGroup/{id}"), &[])
    }

    #[must_use]
    pub fn bangumi(&self, id: &str) -> String {
        self.url(&format!("/Home/Bangumi/{id}"), &[])
    }

    /// All releases of one show, optionally narrowed to a subtitle group.
    #[must_use]
    pub fn expand_episode_table(&self, bangumi_id: &str, subtitle_group_id: Option<&str>, take: u32) -> String {
        let take = take.to_string();
        let mut query = vec![("bangumiId", bangumi_id)];
        if let Some(id) = subtitle_group_id {
            query.push(("subtitleGroupId", id));
        }
        query.push(("take", take.as_str()));
        self.url("/Home/ExpandEpisodeTable", &query)
    }

    #[must_use]
    pub fn episode(&self, id: &str) -> String {
        self.url(&format!("/Home/Episode/{id}"), &[])
    }

    #[must_use]
    pub fn my_bangumi(&self) -> String {
        self.url("/Home/MyBangumi", &[])
    }

    #[must_use]
    pub fn login(&self) -> String {
        self.url("/Account/Login", &[])
    }

    #[must_use]
    pub fn register(&self) -> String {
        self.url("/Account/Register", &[])
    }

    #[must_use]
    pub fn forgot_password(&self) -> String {
        self.url("/Account/ForgotPassword", &[])
    }

    #[must_use]
    pub fn subscribe(&self) -> String {
        self.url("/Home/SubscribeBangumi", &[])
    }

    #[must_use]
    pub fn unsubscribe(&self) -> String {
        self.url("/Home/UnsubscribeBangumi", &[])
    }

    /// Host the session cookies are stored under.
    #[must_use]
    pub fn cookie_domain(&self) -> String {
        url_utils::cookie_domain(&self.base)
    }
}

/// JSON body of a subscribe or unsubscribe call.
///
/// ```rust
/// use rs_mikan::endpoints::SubscribeRequest;
///
/// let body = SubscribeRequest::new("3141", Some("583"));
/// assert_eq!(
///     serde_json::to_string(&body).ok().as_deref(),
///     Some(r#"{"BangumiID":"3141","SubtitleGroupID":"583"}"#)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    #[serde(rename = "BangumiID")]
    pub bangumi_id: String,

    /// Absent subscribes to every group of the show.
    #[serde(rename = "SubtitleGroupID", skip_serializing_if = "Option::is_none")]
    pub subtitle_group_id: Option<String>,
}

impl SubscribeRequest {
    /// An empty group id counts as absent.
    #[must_use]
    pub fn new(bangumi_id: &str, subtitle_group_id: Option<&str>) -> Self {
        Self {
            bangumi_id: bangumi_id.to_string(),
            subtitle_group_id: subtitle_group_id
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }
}

/// Form body of the login post.
#[must_use]
pub fn login_form(user_name: &str, password: &str, token: Option<&str>, return_url: Option<&str>) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    form.append_pair("UserName", user_name)
        .append_pair("Password", password)
        .append_pair("RememberMe", "true")
        .append_pair(TOKEN_FIELD, token.unwrap_or_default());
    if let Some(url) = return_url.filter(|url| !url.is_empty()) {
        form.append_pair("ReturnUrl", url);
    }
    form.finish()
}

/// Form body of the registration post.
#[must_use]
pub fn register_form(email: &str, password: &str, confirm_password: &str, token: Option<&str>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("Email", email)
        .append_pair("Password", password)
        .append_pair("ConfirmPassword", confirm_password)
        .append_pair(TOKEN_FIELD, token.unwrap_or_default())
        .finish()
}

/// Form body of the forgot-password post.
#[must_use]
pub fn forgot_password_form(email: &str, token: Option<&str>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("Email", email)
        .append_pair(TOKEN_FIELD, token.unwrap_or_default())
        .finish()
}
