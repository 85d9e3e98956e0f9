//! Sitemap XML emission.
//!
//! Writes `<urlset>` documents for the canonical paths of classified routes.
//! One `<url>` per entry; `lastmod` uses the W3C date format sitemaps expect.

use crate::error::Error;
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const URLSET_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One sitemap entry.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    /// Absolute URL of the page.
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn new(loc: &str) -> Self {
        Self {
            loc: loc.to_string(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// Sitemap change-frequency hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// Serialize entries into a sitemap `<urlset>` document.
pub fn write_sitemap(entries: &[SitemapEntry]) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", URLSET_XMLNS));
    emit(&mut writer, Event::Start(urlset))?;

    for entry in entries {
        emit(&mut writer, Event::Start(BytesStart::new("url")))?;

        write_text_element(&mut writer, "loc", &entry.loc)?;
        if let Some(date) = entry.lastmod {
            write_text_element(&mut writer, "lastmod", &date.format("%Y-%m-%d").to_string())?;
        }
        if let Some(freq) = entry.changefreq {
            write_text_element(&mut writer, "changefreq", freq.as_str())?;
        }
        if let Some(priority) = entry.priority {
            write_text_element(&mut writer, "priority", &format!("{priority:.1}"))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let bytes = writer.into_inner();
    // The writer only ever receives valid UTF-8.
    Ok(String::from_utf8(bytes).unwrap_or_default())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), Error> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}
