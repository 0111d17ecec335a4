//! Release-tag classification for torrent titles.
//!
//! Titles on the site pack resolution, codec, container, and subtitle
//! language into free text (`[字幕组] 番名 - 01 [1080p][简繁内封]`). The
//! classifier matches a fixed keyword table against a lower-cased copy and
//! returns canonical tags; the title itself is only bracket-normalized.

use std::collections::BTreeSet;

/// Keyword (lower-case) to canonical tag.
///
/// Several keywords share a canonical tag (`cht`, `big5` and `繁体` all
/// give `繁`); the resulting set collapses them.
pub static KEYWORDS: &[(&str, &str)] = &[
    ("720p", "720P"),
    ("1080p", "1080P"),
    ("480p", "480P"),
    ("big5", "繁"),
    ("mp4", "MP4"),
    ("mkv", "MKV"),
    ("hevc", "HEVC"),
    ("简日", "简日"),
    ("双语", "双语"),
    ("chs", "简"),
    ("gb", "简"),
    ("web-dl", "WEB-DL"),
    ("avc", "AVC"),
    ("繁体", "繁"),
    ("cht", "繁"),
    ("简体", "简"),
    ("合集", "合集"),
    ("内封", "内嵌"),
    ("内挂", "内嵌"),
    ("内嵌", "内嵌"),
    ("繁日", "繁日"),
    ("10bit", "10bit"),
    ("外挂", "外挂"),
    ("简繁", "简繁"),
    ("搬运", "搬运"),
    ("简中", "简中"),
    ("繁中", "繁中"),
    ("国漫", "国漫"),
    ("x264", "x264"),
    ("x265", "x265"),
    ("dvdrip", "DVDRip"),
    ("8bit", "8bit"),
    ("aac", "AAC"),
    ("flac", "FLAC"),
    ("粤语", "粤语"),
    ("tvb", "TVB"),
    ("srt", "SRT"),
    ("2160p", "2160P"),
    ("web-rip", "WEB-Rip"),
    ("webrip", "WEB-Rip"),
    ("opusx2", "OPUSx2"),
    ("opusx3", "OPUSx3"),
    ("opus", "OPUS"),
    ("opus 5.1", "OPUS 5.1"),
    ("h264", "H264"),
    ("h.264", "H264"),
    ("h.265", "HEVC"),
    ("ova", "OVA"),
    ("bd", "BD"),
    ("bdrip", "BDrip"),
    ("无修版", "无修版"),
    ("无修正", "无修正"),
    ("怀旧老番", "怀旧老番"),
    ("剧场版", "剧场版"),
    ("tvrip", "TVrip"),
    ("国语", "国语"),
    ("60fps", "60FPS"),
    ("sp", "SP"),
    ("hdr", "HDR"),
    ("ost", "OST"),
    ("oad", "OAD"),
    ("movie", "Movie"),
    ("ac3", "AC3"),
    ("hdtv-rip", "HDTV-Rip"),
    ("3840x2160", "4K"),
    ("4k", "4K"),
    ("truehd", "TrueHD"),
    ("main10p", "Main10P"),
    ("yuv420p8", "YUV420P8"),
    ("重制版", "重制版"),
    ("50fps", "50FPS"),
    ("tv未放送", "TV未放送"),
    ("特别篇", "特别篇"),
    ("网盘", "网盘"),
    ("網盤", "网盘"),
    ("baha", "巴哈"),
    ("1920x1080", "1080P"),
    ("1280x720", "720P"),
    ("ass", "ASS"),
];

/// A title with its classified release tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedTitle {
    /// Input text with full-width `【】` replaced by `[]`, otherwise verbatim.
    pub title: String,

    /// Canonical tags, deduplicated, in descending string order.
    pub tags: Vec<String>,
}

/// Replace full-width brackets with ASCII ones.
#[must_use]
pub fn normalize_brackets(text: &str) -> String {
    text.replace('【', "[").replace('】', "]")
}

/// Classify a title against [`KEYWORDS`].
///
/// Matching is plain substring containment on the lower-cased title, so
/// short keywords such as `bd` or `sp` also fire inside longer words. The
/// tag order is descending (`x265` before `HEVC` before `1080P`), which the
/// consuming UI relies on for a stable display. The comparison is plain byte
/// order, so case matters: `TrueHD` sorts before `TVB`.
///
/// ```rust
/// use rs_mikan::tags::parse_tags_and_title;
///
/// let tagged = parse_tags_and_title("【喵萌奶茶屋】番名 - 01【1080p】【简体】");
/// assert_eq!(tagged.title, "[喵萌奶茶屋]番名 - 01[1080p][简体]");
/// assert_eq!(tagged.tags, vec!["简", "1080P"]);
/// ```
#[must_use]
pub fn parse_tags_and_title(text: &str) -> TaggedTitle {
    let title = normalize_brackets(text);
    let lower = title.to_lowercase();

    let tags: BTreeSet<&'static str> = KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, tag)| *tag)
        .collect();

    TaggedTitle {
        title,
        tags: tags.into_iter().rev().map(str::to_string).collect(),
    }
}
