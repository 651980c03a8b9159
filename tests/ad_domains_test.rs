use clip_filter::domains::{AD_IMAGE_DOMAINS, AD_LINK_DOMAINS};
use clip_filter::{apply_content_filters, Blocklists, ContentFilter, DomainList, FilterOverrides};
use dom_query::Document;

fn filter(html: &str, overrides: &FilterOverrides) -> (Document, clip_filter::FilterStats) {
    let doc = Document::from(html);
    let stats = apply_content_filters(&doc.select("#root"), overrides);
    (doc, stats)
}

#[test]
fn default_tables_are_lowercase_and_non_empty() {
    for domain in AD_IMAGE_DOMAINS.iter().chain(AD_LINK_DOMAINS) {
        assert_eq!(*domain, domain.to_ascii_lowercase());
        assert!(!domain.starts_with('.'));
    }

    let lists = Blocklists::default();
    assert_eq!(lists.ad_images.len(), AD_IMAGE_DOMAINS.len());
    assert_eq!(lists.ad_links.len(), AD_LINK_DOMAINS.len());
}

#[test]
fn suffix_match_requires_label_boundary() {
    let list = DomainList::new(["taboola.com"]);

    assert!(list.matches("taboola.com"));
    assert!(list.matches("cdn.taboola.com"));
    assert!(list.matches("CDN.Taboola.COM"));
    assert!(list.matches("taboola.com."));
    assert!(!list.matches("nottaboola.com"));
    assert!(!list.matches("taboola.com.example.org"));
    assert!(!list.matches(""));
}

#[test]
fn lazy_loaded_ad_image_is_removed() {
    let (doc, stats) = filter(
        r#"<div id="root">
            <p>Story text that carries the article.</p>
            <img id="lazy" data-src="https://tpc.googlesyndication.com/simgad/42" width="728" height="90">
            <img id="photo" data-src="https://images.example.org/river.jpg" width="728" height="400">
        </div>"#,
        &FilterOverrides::default(),
    );

    assert_eq!(stats.images_skipped, 1);
    assert!(doc.select("#lazy").is_empty());
    assert!(doc.select("#photo").exists());
}

#[test]
fn protocol_relative_sources_resolve() {
    let (doc, stats) = filter(
        r#"<div id="root">
            <p>See <a href="//www.outbrain.com/what-is">what is this</a> below.</p>
            <img src="//sb.scorecardresearch.com/p?c1=2" width="1" height="1">
        </div>"#,
        &FilterOverrides::default(),
    );

    assert_eq!(stats.ad_links, 1);
    assert_eq!(stats.images_skipped, 1);
    assert!(doc.select("a").is_empty());
    assert!(doc.select("img").is_empty());
}

#[test]
fn hostless_and_broken_urls_never_match() {
    let (doc, stats) = filter(
        r#"<div id="root">
            <p>
                <a href="mailto:tips@example.com">Send us a tip</a>,
                <a href="javascript:void(0)">open the menu</a>,
                <a href="http://[bad-host/">broken link</a> and
                <a href="">empty link</a> sit in ordinary prose.
            </p>
            <img id="inline" src="data:image/png;base64,iVBORw0KGgo=" width="400" height="300">
        </div>"#,
        &FilterOverrides::default(),
    );

    assert_eq!(stats.ad_links, 0);
    assert_eq!(stats.images_skipped, 0);
    assert_eq!(doc.select("a").length(), 4);
    assert!(doc.select("#inline").exists());
}

#[test]
fn data_uri_pixel_is_still_a_tracking_pixel() {
    let (doc, stats) = filter(
        r#"<div id="root"><p>Text of the story goes here.</p><img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=" width="1" height="1"></div>"#,
        &FilterOverrides::default(),
    );

    assert_eq!(stats.images_skipped, 1);
    assert!(doc.select("img").is_empty());
}

#[test]
fn relative_links_use_configured_base() {
    let html = r#"<div id="root"><p>Grab the <a href="/r/deal">limited offer</a> today.</p></div>"#;

    let (doc, stats) = filter(html, &FilterOverrides::default());
    assert_eq!(stats.ad_links, 0);
    assert!(doc.select("a").exists());

    let overrides = FilterOverrides {
        link_base_url: Some("https://go.skimresources.com/".to_string()),
        ..FilterOverrides::default()
    };
    let (doc, stats) = filter(html, &overrides);
    assert_eq!(stats.ad_links, 1);
    assert!(doc.select("a").is_empty());
    assert_eq!(doc.select("p").text().as_ref(), "Grab the limited offer today.");
}

#[test]
fn invalid_base_url_keeps_relative_links() {
    let overrides = FilterOverrides {
        link_base_url: Some("not a url".to_string()),
        ..FilterOverrides::default()
    };
    let (doc, stats) = filter(
        r#"<div id="root"><p>Read the <a href="/more">full story</a> and the <a href="https://bit.ly/x">short link</a>.</p></div>"#,
        &overrides,
    );

    assert_eq!(stats.ad_links, 1);
    assert_eq!(doc.select("a").length(), 1);
    assert_eq!(doc.select("a").text().as_ref(), "full story");
}

#[test]
fn empty_blocklists_disable_domain_matching() {
    let doc = Document::from(
        r#"<div id="root">
            <p>Story <a href="https://taboola.com/x">Sponsored</a> text.</p>
            <img id="ad" src="https://ad.doubleclick.net/b.jpg" width="300" height="250">
        </div>"#,
    );
    let filter = ContentFilter::default().with_blocklists(Blocklists {
        ad_images: DomainList::default(),
        ad_links: DomainList::default(),
    });

    let stats = filter.apply(&doc.select("#root"));

    assert_eq!(stats.ad_links, 0);
    assert_eq!(stats.images_skipped, 0);
    assert!(doc.select("a").exists());
    assert!(doc.select("#ad").exists());
}
