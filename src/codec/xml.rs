use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{BookRecord, CodecError};

const LIBRARY: &str = "library";
const BOOK: &str = "book";

/// Prices are written in the shortest form that reads back exactly, always
/// with a fractional part (`20.0`, not `20`).
pub fn format_price(price: f64) -> String {
    format!("{price:?}")
}

pub fn write_records(records: &[BookRecord]) -> Result<String, CodecError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Start(BytesStart::new(LIBRARY)))?;
    for record in records {
        writer.write_event(Event::Start(BytesStart::new(BOOK)))?;
        write_field(&mut writer, "title", &record.title)?;
        write_field(&mut writer, "author", &record.author)?;
        write_field(&mut writer, "price", &format_price(record.price))?;
        write_field(&mut writer, "genre", &record.genre)?;
        write_field(&mut writer, "publication_date", &record.publication_date)?;
        writer.write_event(Event::End(BytesEnd::new(BOOK)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(LIBRARY)))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_field(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<(), CodecError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[derive(Debug, Default)]
struct PartialRecord {
    title: Option<String>,
    author: Option<String>,
    price: Option<String>,
    genre: Option<String>,
    publication_date: Option<String>,
}

impl PartialRecord {
    fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            "title" => &mut self.title,
            "author" => &mut self.author,
            "price" => &mut self.price,
            "genre" => &mut self.genre,
            "publication_date" => &mut self.publication_date,
            _ => return,
        };
        *slot = Some(value);
    }

    fn finish(self) -> Result<BookRecord, CodecError> {
        let price = self.price.ok_or(CodecError::MissingField("price"))?;
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|source| CodecError::InvalidPrice {
                value: price.clone(),
                source,
            })?;
        Ok(BookRecord {
            title: self.title.ok_or(CodecError::MissingField("title"))?,
            author: self.author.ok_or(CodecError::MissingField("author"))?,
            price,
            genre: self.genre.ok_or(CodecError::MissingField("genre"))?,
            publication_date: self
                .publication_date
                .ok_or(CodecError::MissingField("publication_date"))?,
        })
    }
}

/// Reads `<book>` records in document order. Text content is kept verbatim,
/// including leading and trailing whitespace.
pub fn read_records(xml: &str) -> Result<Vec<BookRecord>, CodecError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut records = Vec::new();
    let mut book: Option<PartialRecord> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8(start.name().as_ref().to_vec())?;
                if name == BOOK {
                    book = Some(PartialRecord::default());
                } else if book.is_some() {
                    field = Some(name);
                    text.clear();
                }
            }
            Event::Empty(empty) => {
                let name = String::from_utf8(empty.name().as_ref().to_vec())?;
                if name == BOOK {
                    records.push(PartialRecord::default().finish()?);
                } else if let Some(partial) = book.as_mut() {
                    partial.set(&name, String::new());
                }
            }
            Event::Text(content) => {
                if field.is_some() {
                    text.push_str(&content.unescape()?);
                }
            }
            Event::CData(content) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8(content.into_inner().into_owned())?);
                }
            }
            Event::End(end) => {
                if end.name().as_ref() == BOOK.as_bytes() {
                    if let Some(partial) = book.take() {
                        records.push(partial.finish()?);
                    }
                } else if let (Some(name), Some(partial)) = (field.take(), book.as_mut()) {
                    partial.set(&name, std::mem::take(&mut text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, author: &str, price: f64) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            author: author.to_string(),
            price,
            genre: "SciFi".to_string(),
            publication_date: "1965-08-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(20.0), "20.0");
        assert_eq!(format_price(7.35), "7.35");
        assert_eq!(format_price(-0.5), "-0.5");
    }

    #[test]
    fn test_write_records_layout() {
        let xml = write_records(&[record("Dune", "Frank Herbert", 20.0)]).unwrap();
        let expected = [
            "<library>",
            "  <book>",
            "    <title>Dune</title>",
            "    <author>Frank Herbert</author>",
            "    <price>20.0</price>",
            "    <genre>SciFi</genre>",
            "    <publication_date>1965-08-01T00:00:00Z</publication_date>",
            "  </book>",
            "</library>",
        ]
        .join("\n");
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_whitespace_survives_round_trip() {
        let records = vec![
            record("  Dune  ", " ", 20.0),
            record("a\n b", "Frank Herbert ", 1.5),
            record("", "\tTabbed", 0.0),
        ];
        let xml = write_records(&records).unwrap();
        assert_eq!(read_records(&xml).unwrap(), records);
    }

    #[test]
    fn test_read_empty_elements_and_cdata() {
        let xml = "<library><book><title><![CDATA[ <Dune> ]]></title><author/>\
            <price> 20 </price><genre>SciFi</genre>\
            <publication_date>1965-08-01</publication_date></book></library>";
        let records = read_records(xml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, " <Dune> ");
        assert_eq!(records[0].author, "");
        assert_eq!(records[0].price, 20.0);
    }

    #[test]
    fn test_read_missing_field() {
        let xml = "<library><book><title>Dune</title></book></library>";
        assert!(matches!(
            read_records(xml).unwrap_err(),
            CodecError::MissingField("price")
        ));
    }

    #[test]
    fn test_read_empty_library() {
        assert!(read_records("<library/>").unwrap().is_empty());
        assert!(read_records(&write_records(&[]).unwrap()).unwrap().is_empty());
    }
}
