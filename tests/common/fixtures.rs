//! Test fixtures for integration tests
//!
//! Provides sample API responses and feed bodies for mock servers.

#![allow(dead_code)]

/// Successful `search.list` response with three results
///
/// The second title carries an HTML entity the client must decode.
pub const YOUTUBE_SEARCH_JSON: &str = r#"{
  "kind": "youtube#searchListResponse",
  "etag": "fixture-etag-search",
  "regionCode": "US",
  "pageInfo": { "totalResults": 3, "resultsPerPage": 3 },
  "items": [
    {
      "kind": "youtube#searchResult",
      "etag": "etag-1",
      "id": { "kind": "youtube#video", "videoId": "a1B2c3D4e5F" },
      "snippet": {
        "publishedAt": "2024-03-01T10:00:00Z",
        "channelId": "UCfixture001",
        "title": "Rust Tutorial for Beginners",
        "description": "Start here.",
        "channelTitle": "CodeWorks",
        "liveBroadcastContent": "none"
      }
    },
    {
      "kind": "youtube#searchResult",
      "etag": "etag-2",
      "id": { "kind": "youtube#video", "videoId": "f6G7h8I9j0K" },
      "snippet": {
        "publishedAt": "2024-02-20T18:30:00Z",
        "channelId": "UCfixture002",
        "title": "Ownership &amp; Borrowing Explained",
        "description": "The borrow checker demystified.",
        "channelTitle": "Systems Hour",
        "liveBroadcastContent": "none"
      }
    },
    {
      "kind": "youtube#searchResult",
      "etag": "etag-3",
      "id": { "kind": "youtube#video", "videoId": "k1L2m3N4o5P" },
      "snippet": {
        "publishedAt": "2024-01-05T08:00:00Z",
        "channelId": "UCfixture003",
        "title": "Building Command Line Tools",
        "description": "A complete walkthrough.",
        "channelTitle": "CodeWorks",
        "liveBroadcastContent": "none"
      }
    }
  ]
}"#;

/// `videos.list` response with durations for the three search results
pub const YOUTUBE_VIDEOS_JSON: &str = r#"{
  "kind": "youtube#videoListResponse",
  "etag": "fixture-etag-videos",
  "pageInfo": { "totalResults": 3, "resultsPerPage": 3 },
  "items": [
    {
      "kind": "youtube#video",
      "etag": "etag-v1",
      "id": "a1B2c3D4e5F",
      "contentDetails": { "duration": "PT11M30S", "dimension": "2d", "definition": "hd" }
    },
    {
      "kind": "youtube#video",
      "etag": "etag-v2",
      "id": "f6G7h8I9j0K",
      "contentDetails": { "duration": "PT1H2M", "dimension": "2d", "definition": "hd" }
    },
    {
      "kind": "youtube#video",
      "etag": "etag-v3",
      "id": "k1L2m3N4o5P",
      "contentDetails": { "duration": "PT9M5S", "dimension": "2d", "definition": "sd" }
    }
  ]
}"#;

/// `search.list` response with no matches
pub const YOUTUBE_EMPTY_SEARCH_JSON: &str = r#"{
  "kind": "youtube#searchListResponse",
  "etag": "fixture-etag-empty",
  "pageInfo": { "totalResults": 0, "resultsPerPage": 0 },
  "items": []
}"#;

/// 403 error body for an exhausted daily quota
pub const YOUTUBE_QUOTA_ERROR_JSON: &str = r#"{
  "error": {
    "code": 403,
    "message": "The request cannot be completed because you have exceeded your quota.",
    "errors": [
      { "message": "quota exceeded", "domain": "youtube.quota", "reason": "quotaExceeded" }
    ]
  }
}"#;

/// 400 error body for an invalid API key
pub const YOUTUBE_BAD_KEY_ERROR_JSON: &str = r#"{
  "error": {
    "code": 400,
    "message": "API key not valid. Please pass a valid API key.",
    "errors": [
      { "message": "Bad Request", "domain": "usageLimits", "reason": "keyInvalid" }
    ]
  }
}"#;

/// Tag feed with three items, newest first
pub const MEDIUM_FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:dc="http://purl.org/dc/terms/" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom" version="2.0">
<channel>
  <title><![CDATA[Stories tagged rust on Medium]]></title>
  <description><![CDATA[Latest stories tagged rust]]></description>
  <link>https://medium.com/tag/rust</link>
  <lastBuildDate>Wed, 17 Apr 2024 10:00:00 GMT</lastBuildDate>
  <item>
    <title><![CDATA[Understanding Lifetimes]]></title>
    <link>https://medium.com/@writer/understanding-lifetimes-1ab2</link>
    <guid isPermaLink="false">https://medium.com/p/1ab2</guid>
    <dc:creator><![CDATA[A Writer]]></dc:creator>
    <pubDate>Wed, 17 Apr 2024 09:15:00 GMT</pubDate>
    <description><![CDATA[<p>A practical look at lifetimes.</p>]]></description>
  </item>
  <item>
    <title><![CDATA[Error Handling Patterns]]></title>
    <link>https://medium.com/@writer/error-handling-patterns-3cd4</link>
    <guid isPermaLink="false">https://medium.com/p/3cd4</guid>
    <dc:creator><![CDATA[Another Writer]]></dc:creator>
    <pubDate>Tue, 16 Apr 2024 14:00:00 GMT</pubDate>
    <description><![CDATA[<p>Result, anyhow &amp; friends.</p>]]></description>
  </item>
  <item>
    <title><![CDATA[Zero-Cost Abstractions]]></title>
    <link>https://medium.com/@writer/zero-cost-abstractions-5ef6</link>
    <guid isPermaLink="false">https://medium.com/p/5ef6</guid>
    <dc:creator><![CDATA[A Writer]]></dc:creator>
    <pubDate>Mon, 15 Apr 2024 08:45:00 GMT</pubDate>
    <description><![CDATA[<p>What the compiler gives you for free.</p>]]></description>
  </item>
</channel>
</rss>"#;

/// Tag feed where the middle item is missing its publication date
pub const MEDIUM_FEED_WITH_BAD_ITEM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title><![CDATA[Stories tagged rust on Medium]]></title>
  <description><![CDATA[Latest stories tagged rust]]></description>
  <link>https://medium.com/tag/rust</link>
  <item>
    <title><![CDATA[Understanding Lifetimes]]></title>
    <link>https://medium.com/@writer/understanding-lifetimes-1ab2</link>
    <pubDate>Wed, 17 Apr 2024 09:15:00 GMT</pubDate>
  </item>
  <item>
    <title><![CDATA[Draft Without a Date]]></title>
    <link>https://medium.com/@writer/draft-without-a-date-0000</link>
  </item>
  <item>
    <title><![CDATA[Zero-Cost Abstractions]]></title>
    <link>https://medium.com/@writer/zero-cost-abstractions-5ef6</link>
    <pubDate>Mon, 15 Apr 2024 08:45:00 GMT</pubDate>
  </item>
</channel>
</rss>"#;

/// Tag feed with no items
pub const MEDIUM_EMPTY_FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title><![CDATA[Stories tagged obscuretopic on Medium]]></title>
  <description><![CDATA[Latest stories tagged obscuretopic]]></description>
  <link>https://medium.com/tag/obscuretopic</link>
</channel>
</rss>"#;
