//! Advertising, tracking and affiliate domain tables.
//!
//! The tables are plain data. Filters receive them through [`Blocklists`],
//! so several pipelines with different lists can coexist.

/// Hosts that serve ad creatives, beacons and analytics pixels.
pub static AD_IMAGE_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "googlesyndication.com",
    "googleadservices.com",
    "google-analytics.com",
    "googletagmanager.com",
    "adservice.google.com",
    "amazon-adsystem.com",
    "adnxs.com",
    "adsrvr.org",
    "advertising.com",
    "adform.net",
    "bidswitch.net",
    "casalemedia.com",
    "criteo.com",
    "criteo.net",
    "moatads.com",
    "openx.net",
    "outbrain.com",
    "outbrainimg.com",
    "pubmatic.com",
    "quantserve.com",
    "revcontent.com",
    "rubiconproject.com",
    "scorecardresearch.com",
    "serving-sys.com",
    "sharethrough.com",
    "smartadserver.com",
    "taboola.com",
    "teads.tv",
    "mgid.com",
    "zedo.com",
    "yieldmo.com",
    "chartbeat.net",
    "hotjar.com",
    "bat.bing.com",
    "pixel.wp.com",
    "stats.wp.com",
    "facebook.net",
    "ads-twitter.com",
    "analytics.twitter.com",
];

/// Hosts whose links are sponsored placements, affiliate redirects or shorteners.
pub static AD_LINK_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "googleadservices.com",
    "taboola.com",
    "outbrain.com",
    "revcontent.com",
    "mgid.com",
    "zergnet.com",
    "adnxs.com",
    "amzn.to",
    "bit.ly",
    "tinyurl.com",
    "ow.ly",
    "buff.ly",
    "shareasale.com",
    "awin1.com",
    "anrdoezrs.net",
    "dpbolvw.net",
    "jdoqocy.com",
    "kqzyfj.com",
    "tkqlhce.com",
    "linksynergy.com",
    "skimresources.com",
    "redirectingat.com",
    "viglink.com",
    "rstyle.me",
    "shopstyle.it",
    "prf.hn",
    "pntra.com",
    "avantlink.com",
    "sjv.io",
    "7eer.net",
    "ojrq.net",
    "clickbank.net",
    "hop.clickbank.net",
];

/// A set of lowercase domains matched exactly or as a dotted suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainList {
    domains: Vec<String>,
}

impl DomainList {
    /// Build a list; entries are trimmed, lowercased and stripped of a leading dot.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    /// List built from a static table.
    #[must_use]
    pub fn from_static(domains: &[&str]) -> Self {
        Self::new(domains.iter().copied())
    }

    /// `host == domain || host.ends_with("." + domain)`, case-insensitive.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }
        self.domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// The two domain tables used by the ad-domain filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklists {
    /// Image hosts whose images are removed.
    pub ad_images: DomainList,
    /// Link hosts whose links are neutralized.
    pub ad_links: DomainList,
}

impl Default for Blocklists {
    fn default() -> Self {
        Self {
            ad_images: DomainList::from_static(AD_IMAGE_DOMAINS),
            ad_links: DomainList::from_static(AD_LINK_DOMAINS),
        }
    }
}
