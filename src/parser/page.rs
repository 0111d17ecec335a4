//! Page kinds and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::result::{
    EpisodeDetail, FeedRecord, Index, SearchResult, SeasonGallery, Show, ShowDetail, ShowRow,
    UserSession,
};

/// Every page family the crate can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Index,
    Season,
    Day,
    Search,
    List,
    Subgroup,
    Bangumi,
    BangumiMore,
    Episode,
    MyBangumi,
    User,
    Login,
    Register,
    ForgotPassword,
}

impl PageKind {
    pub const ALL: [Self; 14] = [
        Self::Index,
        Self::Season,
        Self::Day,
        Self::Search,
        Self::List,
        Self::Subgroup,
        Self::Bangumi,
        Self::BangumiMore,
        Self::Episode,
        Self::MyBangumi,
        Self::User,
        Self::Login,
        Self::Register,
        Self::ForgotPassword,
    ];

    /// Kebab-case name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Season => "season",
            Self::Day => "day",
            Self::Search => "search",
            Self::List => "list",
            Self::Subgroup => "subgroup",
            Self::Bangumi => "bangumi",
            Self::BangumiMore => "bangumi-more",
            Self::Episode => "episode",
            Self::MyBangumi => "my-bangumi",
            Self::User => "user",
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

/// Output of [`Parser::extract`](crate::Parser::extract).
///
/// Serializes as the bare inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Page {
    Index(Box<Index>),
    ShowRows(Vec<ShowRow>),
    Records(Vec<FeedRecord>),
    Search(SearchResult),
    Galleries(Vec<SeasonGallery>),
    Show(Box<ShowDetail>),
    Episode(Box<EpisodeDetail>),
    Shows(Vec<Show>),
    Session(Option<UserSession>),
    Token(Option<String>),
}
