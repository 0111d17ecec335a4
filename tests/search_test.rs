use rs_mikan::{parse_document, Parser, SearchResult};

const SEARCH_PAGE: &str = r#"<html><body>
<div class="pull-left leftbar-container">
    <ul class="list-unstyled leftbar-item">
        <li><span class="subgroup-longname" data-subgroupid="">全部</span></li>
        <li><span class="subgroup-longname" data-subgroupid="583">ANi</span></li>
        <li><span class="subgroup-longname" data-subgroupid="370">LoliHouse</span></li>
    </ul>
</div>
<div class="central-container">
    <ul class="list-inline an-ul">
        <li>
            <a href="/Home/Bangumi/3141" target="_blank">
                <span data-src="/images/Bangumi/202309/a.jpg?width=400&height=400" class="js-expand_bangumi"></span>
                <div class="an-info"><div class="an-text" title="葬送的芙莉莲">葬送的芙莉莲</div></div>
            </a>
        </li>
    </ul>
    <table class="table table-striped tbl-border fadeIn">
        <tbody>
            <tr class="js-search-results-row">
                <td><input type="checkbox"></td>
                <td><a href="/Home/Episode/aaa" class="magnet-link-wrap">[ANi] 葬送的芙莉莲 - 28 [1080P][Baha][WEB-DL][AAC AVC][CHT][MP4]</a><a data-clipboard-text="magnet:?xt=urn:btih:aaa" class="js-magnet magnet-link">[复制磁连]</a></td>
                <td>352.5MB</td>
                <td>2024/03/22 23:01</td>
                <td><a href="/Download/20240322/aaa.torrent"><img src="/images/download.png"></a></td>
            </tr>
            <tr class="js-search-results-row">
                <td>only</td><td>four</td><td>cells</td><td>here</td>
            </tr>
        </tbody>
    </table>
</div>
</body></html>"#;

fn search() -> SearchResult {
    Parser::default().search(&parse_document(SEARCH_PAGE))
}

#[test]
fn search_subgroups_require_id() {
    let result = search();
    let names: Vec<&str> = result.subgroups.iter().map(|g| g.name.as_str()).collect();

    assert_eq!(names, ["ANi", "LoliHouse"]);
    assert_eq!(result.subgroups[1].id.as_deref(), Some("370"));
}

#[test]
fn search_show_tiles() {
    let result = search();

    assert_eq!(result.shows.len(), 1);
    let show = &result.shows[0];
    assert_eq!(show.id, "3141");
    assert_eq!(show.name, "葬送的芙莉莲");
    assert_eq!(show.cover, "https://mikanani.me/images/Bangumi/202309/a.jpg");
    assert!(!show.subscribed);
    assert!(show.week.is_empty());
}

#[test]
fn search_rows_with_too_few_cells_are_skipped() {
    let result = search();
    assert_eq!(result.records.len(), 1);

    let record = &result.records[0];
    assert_eq!(record.title, "[ANi] 葬送的芙莉莲 - 28 [1080P][Baha][WEB-DL][AAC AVC][CHT][MP4]");
    assert_eq!(record.url, "https://mikanani.me/Home/Episode/aaa");
    assert_eq!(record.magnet, "magnet:?xt=urn:btih:aaa");
    assert_eq!(record.size, "352.5MB");
    assert_eq!(record.publish_at, "3月22日周五 23:01");
    assert_eq!(record.torrent, "https://mikanani.me/Download/20240322/aaa.torrent");
    assert_eq!(
        record.tags,
        vec!["繁", "巴哈", "WEB-DL", "MP4", "AVC", "AAC", "1080P"]
    );
    assert!(record.groups.is_empty());
}

#[test]
fn search_lists_are_independent() {
    let html = r#"<table><tr class="js-search-results-row"><td></td><td></td><td></td><td></td><td></td></tr></table>"#;
    let result = Parser::default().search(&parse_document(html));

    assert!(result.shows.is_empty());
    assert!(result.subgroups.is_empty());
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].title, "");
    assert_eq!(result.records[0].torrent, "");
}
