//! "The High-Value Networking Checklist": a single A4 page of checkbox items grouped into
//! before, during and after sections.

use crate::model::{Block, Color, Document, Face, Group, Page, PageSize, Rect, Text};

use super::brand::{style, text, CHARCOAL, CORAL, GRAY, LIGHT_GRAY, SITE, WHITE};

/// Title stored in the PDF metadata.
pub const TITLE: &str = "The High-Value Networking Checklist";

/// File name of the generated PDF.
pub const FILE_NAME: &str = "networking-checklist.pdf";

const PAGE: PageSize = PageSize::A4;
const WIDTH: f64 = PAGE.width;
const HEIGHT: f64 = PAGE.height;
const MARGIN: f64 = 40.0;
const CONTENT_WIDTH: f64 = WIDTH - MARGIN * 2.0;

/// Notes longer than this many characters are shortened in the last section.
const NOTE_LIMIT: usize = 70;

struct Section {
    label: &'static str,
    subtitle: &'static str,
    subtitle_x: f64,
    banner: Color,
    label_color: Color,
    checkbox: Color,
    truncate_notes: bool,
    items: &'static [(&'static str, &'static str)],
}

const SECTIONS: [Section; 3] = [
    Section {
        label: "BEFORE",
        subtitle: "Preparation is 80% of success",
        subtitle_x: MARGIN + 80.0,
        banner: CORAL,
        label_color: WHITE,
        checkbox: CORAL,
        truncate_notes: false,
        items: &[
            ("Research attendees/host", "Know who will be there and what they do"),
            ("Prepare 2-3 talking points", "Topics you can speak knowledgeably about"),
            ("Set a connection goal", "Aim for 2-3 quality conversations, not 10 cards"),
            ("Prepare your intro", "10 seconds: name, what you do, one interesting hook"),
            ("Think about what you can give", "Intros, insights, resources you can offer"),
            ("Dress appropriately", "Match the context; when in doubt, overdress slightly"),
        ],
    },
    Section {
        label: "DURING",
        subtitle: "Quality over quantity",
        subtitle_x: MARGIN + 80.0,
        banner: CHARCOAL,
        label_color: CORAL,
        checkbox: CHARCOAL,
        truncate_notes: false,
        items: &[
            ("Ask open-ended questions", "\"What are you working on?\" \"What brought you here?\""),
            ("Listen more than you talk", "Aim for 70% listening, 30% talking"),
            ("Find common ground", "Shared interests, challenges, or connections"),
            ("Take mental notes", "Remember details to reference in follow-up"),
            ("Offer value first", "Share an insight, make an intro, recommend a resource"),
            ("Exchange contact info properly", "Phone + context, not just business cards"),
            ("End conversations gracefully", "\"Let me not keep you - great meeting you\""),
            ("Introduce people to each other", "Be a connector, not just a collector"),
        ],
    },
    Section {
        label: "AFTER",
        subtitle: "This is where relationships are built",
        subtitle_x: MARGIN + 70.0,
        banner: CORAL,
        label_color: WHITE,
        checkbox: CORAL,
        truncate_notes: true,
        items: &[
            (
                "Send follow-up within 48 hours",
                "\"Great meeting you at [event]. Enjoyed our chat about [topic]\"",
            ),
            ("Reference something specific", "Show you were paying attention"),
            ("Deliver on any promises", "If you said you would send something, do it"),
            ("Add them to your CRM/notes", "Date met, context, interests, follow-up plan"),
            ("Connect them with someone", "Make an intro within 2 weeks if appropriate"),
            ("Schedule a 1:1 coffee/call", "Move from event contact to real relationship"),
            ("Add to 90-day nurture cycle", "Light touch every 3-4 weeks"),
        ],
    },
];

/// Builds the one-page checklist.
pub fn document() -> Document {
    let mut page = Page::new().with_blocks([
        Block::fixed(Rect::filled(0.0, HEIGHT - 70.0, WIDTH, 70.0, CHARCOAL)),
        Block::fixed(Rect::filled(0.0, HEIGHT - 74.0, WIDTH, 4.0, CORAL)),
        Block::Fixed(text(
            "LUME",
            MARGIN,
            HEIGHT - 45.0,
            style(Face::Display, 18.0, WHITE),
        )),
        Block::Fixed(text(
            "THE HIGH-VALUE NETWORKING CHECKLIST",
            WIDTH - MARGIN - 260.0,
            HEIGHT - 45.0,
            style(Face::BodyBold, 12.0, CORAL),
        )),
        Block::MoveTo(HEIGHT - 110.0),
        Block::line(
            "Use this checklist before, during, and after every networking interaction.",
            MARGIN,
            style(Face::DisplayItalic, 11.0, GRAY),
            35.0,
        ),
    ]);

    for (index, section) in SECTIONS.iter().enumerate() {
        if index > 0 {
            page.push(Block::Gap(10.0));
        }
        page.push(banner(section));
        for (item, note) in section.items {
            let note = if section.truncate_notes {
                truncate_note(note, NOTE_LIMIT)
            } else {
                (*note).to_owned()
            };
            page.push(checkbox_row(item, &note, section.checkbox));
        }
    }

    let page = page.with_blocks([
        Block::fixed(Rect::filled(0.0, 0.0, WIDTH, 50.0, LIGHT_GRAY)),
        Block::Fixed(text(
            &format!(
                "Want the complete system? Get the full HNI Networking Playbook at {}",
                SITE
            ),
            MARGIN,
            20.0,
            style(Face::Body, 9.0, GRAY),
        )),
        Block::Fixed(text(
            &format!("LUME | {}", SITE),
            WIDTH - MARGIN - 130.0,
            20.0,
            style(Face::BodyBold, 9.0, CORAL),
        )),
    ]);

    Document::new(TITLE).with_size(PAGE).with_page(page)
}

fn banner(section: &Section) -> Block {
    Group::new(40.0)
        .with(Rect::filled(MARGIN, -22.0, CONTENT_WIDTH, 26.0, section.banner))
        .with(Text::new(
            section.label,
            MARGIN + 12.0,
            -15.0,
            style(Face::BodyBold, 12.0, section.label_color),
        ))
        .with(Text::new(
            section.subtitle,
            section.subtitle_x,
            -15.0,
            style(Face::Body, 10.0, WHITE),
        ))
        .into()
}

fn checkbox_row(item: &str, note: &str, border: Color) -> Block {
    Group::new(32.0)
        .with(Rect::filled(MARGIN, -12.0, 14.0, 14.0, WHITE).with_border(border, 1.5))
        .with(Text::new(
            item,
            MARGIN + 22.0,
            -9.0,
            style(Face::BodyBold, 11.0, CHARCOAL),
        ))
        .with(Text::new(
            note,
            MARGIN + 22.0,
            -22.0,
            style(Face::Body, 9.0, GRAY),
        ))
        .into()
}

/// Shortens `note` to `limit` characters, replacing the tail with "...".
fn truncate_note(note: &str, limit: usize) -> String {
    if note.chars().count() <= limit {
        return note.to_owned();
    }
    let mut shortened: String = note.chars().take(limit.saturating_sub(3)).collect();
    shortened.push_str("...");
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontSet;
    use crate::render::{compose_page, DrawOp};

    fn composed() -> Vec<DrawOp> {
        compose_page(&document().pages()[0], &FontSet::standard(), PAGE)
    }

    fn texts(ops: &[DrawOp]) -> Vec<&Text> {
        ops.iter().filter_map(DrawOp::as_text).collect()
    }

    #[test]
    fn short_notes_are_kept() {
        assert_eq!(
            truncate_note("Light touch every 3-4 weeks", 70),
            "Light touch every 3-4 weeks"
        );
        assert_eq!(truncate_note(&"a".repeat(70), 70), "a".repeat(70));
    }

    #[test]
    fn long_notes_end_in_an_ellipsis() {
        let note = "b".repeat(71);
        let truncated = truncate_note(&note, 70);
        assert_eq!(truncated.chars().count(), 70);
        assert_eq!(truncated, format!("{}...", "b".repeat(67)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let note = "\u{2014}".repeat(80);
        let truncated = truncate_note(&note, 70);
        assert!(truncated.starts_with(&"\u{2014}".repeat(67)));
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn single_page_with_twenty_one_items() {
        let document = document();
        assert_eq!(document.pages().len(), 1);
        assert!(document.bookmarks().is_empty());

        let ops = composed();
        let checkboxes = ops
            .iter()
            .filter_map(DrawOp::as_rect)
            .filter(|rect| rect.border.is_some())
            .count();
        assert_eq!(checkboxes, 21);
    }

    #[test]
    fn first_item_sits_below_the_before_banner() {
        let ops = composed();
        let placed = texts(&ops);

        let banner = placed.iter().find(|text| text.content == "BEFORE").expect("banner");
        assert_eq!((banner.x, banner.y), (52.0, 682.0));

        let item = placed
            .iter()
            .find(|text| text.content == "Research attendees/host")
            .expect("first item");
        assert_eq!((item.x, item.y), (62.0, 648.0));

        let note = placed
            .iter()
            .find(|text| text.content == "Know who will be there and what they do")
            .expect("first note");
        assert_eq!((note.x, note.y), (62.0, 635.0));
    }

    #[test]
    fn sections_are_separated_by_banners() {
        let ops = composed();
        let placed = texts(&ops);
        let y_of = |label: &str| {
            placed
                .iter()
                .find(|text| text.content == label)
                .map(|text| text.y)
                .expect("banner label")
        };

        // Banner, six rows, section gap.
        assert_eq!(y_of("BEFORE") - y_of("DURING"), 40.0 + 6.0 * 32.0 + 10.0);
        assert_eq!(y_of("DURING") - y_of("AFTER"), 40.0 + 8.0 * 32.0 + 10.0);

        let during = placed.iter().find(|text| text.content == "DURING").expect("during");
        assert_eq!(during.style.color, CORAL);
    }

    #[test]
    fn checkbox_borders_follow_the_section() {
        let ops = composed();
        let borders: Vec<Color> = ops
            .iter()
            .filter_map(DrawOp::as_rect)
            .filter_map(|rect| rect.border.map(|border| border.color))
            .collect();

        assert!(borders[..6].iter().all(|color| *color == CORAL));
        assert!(borders[6..14].iter().all(|color| *color == CHARCOAL));
        assert!(borders[14..].iter().all(|color| *color == CORAL));
    }

    #[test]
    fn footer_is_drawn_last() {
        let ops = composed();
        let last = ops.last().and_then(DrawOp::as_text).expect("footer text");
        assert_eq!(last.content, "LUME | thelumeproject.com");
        assert_eq!((last.x, last.y), (WIDTH - MARGIN - 130.0, 20.0));
    }
}
