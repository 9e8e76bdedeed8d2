//! "The HNI Networking Playbook": cover, contents, introduction, eight chapters, outro, call to
//! action and back cover on 28 A4 pages.

use crate::model::{
    Block, Document, Element, Face, Group, List, ListItem, Marker, Page, PageSize, Rect, Text,
    TextColumn, TextStyle,
};

use super::brand::{
    style, text, top_rule, BLACK, CHARCOAL, CORAL, CREAM, DARK_GRAY, GRAY, MIST, SILVER, SITE,
    STONE, WATERMARK, WHITE,
};

/// Title stored in the PDF metadata.
pub const TITLE: &str = "The HNI Networking Playbook";

/// File name of the generated PDF.
pub const FILE_NAME: &str = "hni-networking-playbook.pdf";

const PAGE: PageSize = PageSize::A4;
const WIDTH: f64 = PAGE.width;
const HEIGHT: f64 = PAGE.height;
const MARGIN: f64 = 60.0;
const CONTENT_WIDTH: f64 = WIDTH - MARGIN * 2.0;

const BODY: TextStyle = style(Face::Body, 12.0, DARK_GRAY);
const BODY_STRONG: TextStyle = style(Face::BodyBold, 12.0, CHARCOAL);
const SMALL: TextStyle = style(Face::Body, 11.0, DARK_GRAY);
const ITEM_TITLE: TextStyle = style(Face::BodyBold, 12.0, CHARCOAL);
const LABEL: TextStyle = style(Face::BodyBold, 10.0, CORAL);
const BULLET: TextStyle = style(Face::Body, 12.0, CORAL);
const POINTER: TextStyle = style(Face::Body, 14.0, CORAL);
const NUMBER: TextStyle = style(Face::BodyBold, 12.0, CORAL);

/// Table of contents: chapter number, title, printed page label.
const CONTENTS: [(&str, &str, &str); 10] = [
    ("", "Introduction: Why Your Network Isn't Working", "4"),
    ("01", "The Compound Network Effect", "6"),
    ("02", "The 5 Types of Connections You Need", "9"),
    ("03", "Quality Over Quantity: The Curated Circle", "13"),
    ("04", "Where High-Value People Actually Meet", "16"),
    ("05", "The Art of the Warm Introduction", "19"),
    ("06", "From Contact to Connection: The 90-Day System", "22"),
    ("07", "Common Mistakes That Kill Your Reputation", "26"),
    ("08", "Your Network Audit Worksheet", "28"),
    ("", "The Shortcut: Why Curated Communities Win", "31"),
];

/// Builds the complete playbook.
pub fn document() -> Document {
    let mut pages = vec![cover(), contents()];
    pages.extend(introduction());
    pages.extend(compound_network_effect());
    pages.extend(five_types());
    pages.extend(quality_over_quantity());
    pages.extend(where_people_meet());
    pages.extend(warm_introductions());
    pages.extend(ninety_day_system());
    pages.extend(common_mistakes());
    pages.extend(audit_worksheet());
    pages.push(the_shortcut());
    pages.push(call_to_action());
    pages.push(back_cover());

    Document::new(TITLE).with_size(PAGE).with_pages(pages)
}

fn body_column() -> TextColumn {
    TextColumn::new(MARGIN, CONTENT_WIDTH, BODY, 20.0)
}

fn body(text: &str) -> Block {
    Block::flow(body_column(), text)
}

fn strong(text: &str) -> Block {
    Block::flow(TextColumn::new(MARGIN, CONTENT_WIDTH, BODY_STRONG, 20.0), text)
}

fn heading(text: &str, size: f64, advance: f64) -> Block {
    Block::line(text, MARGIN, style(Face::Display, size, CHARCOAL), advance)
}

fn page_number(label: &str) -> Block {
    Block::Fixed(text(label, WIDTH / 2.0, 40.0, style(Face::Body, 10.0, GRAY)))
}

/// First page of a chapter: dark title band with kicker and two-line title, optionally a large
/// chapter number behind it. Content starts at 220pt below the top edge.
fn chapter_opener(kicker: &str, title: [&str; 2], number: Option<&str>) -> Page {
    let mut page = Page::new().with_background(WHITE);

    if let Some(number) = number {
        page.push(Block::Fixed(text(
            number,
            WIDTH - 150.0,
            HEIGHT - 200.0,
            style(Face::Display, 120.0, WATERMARK),
        )));
    }

    let title_style = style(Face::Display, 28.0, WHITE);
    page.with_blocks([
        Block::fixed(Rect::filled(0.0, HEIGHT - 160.0, WIDTH, 160.0, CHARCOAL)),
        Block::fixed(Rect::filled(0.0, HEIGHT - 164.0, WIDTH, 4.0, CORAL)),
        Block::Fixed(text(kicker, MARGIN, HEIGHT - 80.0, style(Face::BodyBold, 12.0, CORAL))),
        Block::Fixed(text(title[0], MARGIN, HEIGHT - 115.0, title_style)),
        Block::Fixed(text(title[1], MARGIN, HEIGHT - 145.0, title_style)),
        Block::MoveTo(HEIGHT - 220.0),
    ])
}

/// A follow-on page with a thin accent rule; content starts 80pt below the top edge.
fn continuation() -> Page {
    Page::new().with_background(WHITE).with_blocks([
        Block::Fixed(top_rule(WIDTH, HEIGHT, 4.0)),
        Block::MoveTo(HEIGHT - 80.0),
    ])
}

fn chapter_bookmark(index: usize) -> String {
    let (number, title, _) = CONTENTS[index];
    if number.is_empty() {
        title.to_owned()
    } else {
        format!("{}. {}", number, title)
    }
}

/// Charcoal call-out with a coral label and wrapped white text.
fn key_insight(insight: &str) -> Block {
    Group::new(120.0)
        .with(Rect::filled(MARGIN, -80.0, CONTENT_WIDTH, 80.0, CHARCOAL))
        .with(Text::new("KEY INSIGHT", MARGIN + 20.0, -25.0, LABEL))
        .with(Element::paragraph(
            TextColumn::new(
                MARGIN + 20.0,
                CONTENT_WIDTH - 40.0,
                style(Face::Body, 12.0, WHITE),
                18.0,
            )
            .paragraph(insight),
            -45.0,
        ))
        .into()
}

/// Cream panel with a coral edge, as used for quotes and summaries.
fn panel(height: f64, advance: f64) -> Group {
    Group::new(advance)
        .with(Rect::filled(MARGIN, -height, CONTENT_WIDTH, height, CREAM))
        .with(Rect::filled(MARGIN, -height, 4.0, height, CORAL))
}

/// The "CHAPTER SUMMARY" panel closing most chapters.
fn chapter_summary(height: f64, first: f64, step: f64, points: &[&str]) -> Block {
    let point_style = style(Face::Body, 11.0, DARK_GRAY);
    panel(height, height)
        .with(Text::new("CHAPTER SUMMARY", MARGIN + 20.0, -25.0, LABEL))
        .with_all(points.iter().enumerate().map(|(index, point)| {
            text(
                point,
                MARGIN + 20.0,
                -first - step * index as f64,
                point_style,
            )
        }))
        .into()
}

fn bullets(x: f64, text_x: f64, advance: f64, items: &[&str]) -> Block {
    List::new(TextColumn::single_line(text_x, BODY, advance))
        .with_marker(Marker::glyph("\u{2022}", x, BULLET))
        .with_items(items.iter().copied())
        .into()
}

/// Items introduced by a marker glyph and a bold title, with a wrapped description below.
fn titled_points(marker: &str, title_advance: f64, spacing: f64, items: &[(&str, &str)]) -> Block {
    List::new(TextColumn::new(
        MARGIN + 20.0,
        CONTENT_WIDTH - 30.0,
        SMALL,
        16.0,
    ))
    .with_marker(Marker::glyph(marker, MARGIN, POINTER))
    .with_title(MARGIN + 20.0, ITEM_TITLE, title_advance)
    .with_spacing(spacing)
    .with_titled_items(
        items
            .iter()
            .map(|(title, desc)| (format!("{}:", title), *desc)),
    )
    .into()
}

fn cover() -> Page {
    let display = |size, color| style(Face::Display, size, color);
    let tagline = style(Face::Body, 12.0, STONE);

    Page::new().with_background(CHARCOAL).with_blocks([
        Block::Fixed(top_rule(WIDTH, HEIGHT, 8.0)),
        Block::Fixed(text("LUME", MARGIN, HEIGHT - 80.0, display(24.0, WHITE))),
        Block::Fixed(text("THE HNI", MARGIN, HEIGHT - 280.0, display(48.0, WHITE))),
        Block::Fixed(text("NETWORKING", MARGIN, HEIGHT - 340.0, display(48.0, CORAL))),
        Block::Fixed(text("PLAYBOOK", MARGIN, HEIGHT - 400.0, display(48.0, WHITE))),
        Block::MoveTo(HEIGHT - 480.0),
        Block::flow(
            TextColumn::new(MARGIN, CONTENT_WIDTH, style(Face::DisplayItalic, 18.0, SILVER), 26.0),
            "How Hyderabad's Most Connected Professionals Build Relationships That Compound",
        ),
        Block::Fixed(text(
            "A guide for founders, executives, and professionals",
            MARGIN,
            100.0,
            tagline,
        )),
        Block::Fixed(text(
            "who want more than business cards and small talk.",
            MARGIN,
            82.0,
            tagline,
        )),
    ])
}

fn contents() -> Page {
    let mut page = Page::new().with_background(CREAM).with_blocks([
        Block::Fixed(top_rule(WIDTH, HEIGHT, 4.0)),
        Block::Fixed(text(
            "CONTENTS",
            MARGIN,
            HEIGHT - 100.0,
            style(Face::Display, 32.0, CHARCOAL),
        )),
        Block::MoveTo(HEIGHT - 180.0),
    ]);

    for (number, title, label) in CONTENTS {
        let mut row = Group::new(36.0);
        let title = if number.is_empty() {
            Text::new(title, MARGIN, 0.0, style(Face::BodyBold, 14.0, CHARCOAL))
        } else {
            row = row.with(Text::new(number, MARGIN, 0.0, style(Face::BodyBold, 14.0, CORAL)));
            Text::new(title, MARGIN + 40.0, 0.0, style(Face::Body, 14.0, CHARCOAL))
        };
        page.push(row.with(title).with(Text::new(
            label,
            WIDTH - MARGIN - 20.0,
            0.0,
            style(Face::Body, 14.0, GRAY),
        )));
    }

    page
}

fn introduction() -> [Page; 2] {
    // The next paragraph starts 40pt below the panel.
    let quote = panel(80.0, 120.0).with(Element::paragraph(
        TextColumn::new(
            MARGIN + 20.0,
            CONTENT_WIDTH - 40.0,
            style(Face::DisplayItalic, 14.0, CHARCOAL),
            22.0,
        )
        .paragraph(
            "\"Your network is your net worth\" isn't just a cliche. It's a fundamental truth that \
             separates those who struggle alone from those who compound success through \
             relationships.",
        ),
        -25.0,
    ));

    let first = chapter_opener("INTRODUCTION", ["Why Your Network", "Isn't Working"], None)
        .with_bookmark(chapter_bookmark(0))
        .with_blocks([
            body(
                "Let's be honest: you've tried networking. You've attended the industry meetups. \
                 You've exchanged business cards at conferences. You've connected with hundreds \
                 of people on LinkedIn.",
            ),
            Block::Gap(20.0),
            body(
                "And yet, when you actually need something \u{2014} a trusted CA, a reliable \
                 contractor, an introduction to a potential investor, a candid second opinion on \
                 a business decision \u{2014} you find yourself scrolling through contacts \
                 wondering who you can actually call.",
            ),
            Block::Gap(20.0),
            body(
                "That's because most networking is broken. It's transactional, shallow, and \
                 forgettable. You meet someone, exchange pleasantries, promise to \"stay in \
                 touch,\" and then... nothing. The relationship dies before it begins.",
            ),
            Block::Gap(30.0),
            quote.into(),
            body(
                "This playbook is different. It's not about collecting contacts \u{2014} it's \
                 about building relationships that compound over time. It's the system that \
                 Hyderabad's most connected professionals use to build networks that actually \
                 work.",
            ),
            page_number("4"),
        ]);

    let learnings = List::new(TextColumn::new(
        MARGIN + 15.0,
        CONTENT_WIDTH - 20.0,
        BODY,
        18.0,
    ))
    .with_marker(Marker::glyph("\u{2022}", MARGIN, BULLET))
    .with_spacing(8.0)
    .with_items([
        "The Compound Network Effect \u{2014} why some relationships multiply while others fizzle",
        "The 5 types of connections every successful professional needs in their circle",
        "Why 30 curated relationships beat 300 random connections",
        "Where high-value people actually spend their time (hint: not at \"networking events\")",
        "The art of getting warm introductions without being awkward or transactional",
        "A 90-day system for turning a first meeting into a lasting relationship",
        "The reputation-killing mistakes most professionals make (and how to avoid them)",
        "A practical worksheet to audit and strengthen your current network",
    ]);

    let second = continuation().with_blocks([
        heading("What You'll Learn", 20.0, 40.0),
        learnings.into(),
        Block::Gap(30.0),
        strong(
            "By the end of this playbook, you'll have a clear framework for building the kind of \
             network that opens doors, creates opportunities, and compounds over time. Let's \
             begin.",
        ),
        page_number("5"),
    ]);

    [first, second]
}

fn compound_network_effect() -> [Page; 3] {
    let row_style = |color| style(Face::Body, 10.0, color);
    let mut comparison = Group::new(140.0)
        .with(Rect::filled(MARGIN, -140.0, CONTENT_WIDTH, 140.0, CREAM))
        .with(Text::new(
            "TRANSACTIONAL",
            MARGIN + 20.0,
            -25.0,
            style(Face::BodyBold, 10.0, GRAY),
        ))
        .with(Text::new("COMPOUND", MARGIN + 250.0, -25.0, LABEL));
    let rows = [
        ("What can you do for me?", "How can we help each other grow?"),
        ("Surface-level exchanges", "Deep, meaningful conversations"),
        ("Forgotten after the event", "Remembered and revisited"),
        ("Value extracted once", "Value multiplies over time"),
    ];
    for (index, (transactional, compound)) in rows.iter().enumerate() {
        let y = -50.0 - 25.0 * index as f64;
        comparison = comparison
            .with(Text::new(*transactional, MARGIN + 20.0, y, row_style(GRAY)))
            .with(Text::new(*compound, MARGIN + 250.0, y, row_style(CHARCOAL)));
    }

    let opener = chapter_opener("CHAPTER ONE", ["The Compound", "Network Effect"], Some("01"))
        .with_bookmark(chapter_bookmark(1))
        .with_blocks([
            body(
                "Think about compound interest. A small amount invested consistently, over time, \
                 grows exponentially. The magic isn't in any single deposit \u{2014} it's in the \
                 accumulation.",
            ),
            Block::Gap(15.0),
            body(
                "Your network works the same way. The most successful professionals don't have \
                 better networking skills \u{2014} they have compounding relationships.",
            ),
            Block::Gap(25.0),
            heading("Transactional vs. Compound Relationships", 16.0, 30.0),
            body(
                "Transactional relationships are one-and-done. You meet, you exchange value (or \
                 try to), and then you move on. There's no depth, no trust, no compound effect.",
            ),
            Block::Gap(15.0),
            body(
                "Compound relationships are different. Each interaction builds on the last. Trust \
                 deepens. Understanding grows. The relationship becomes more valuable over time \
                 \u{2014} to both parties.",
            ),
            Block::Gap(25.0),
            comparison.into(),
            page_number("6"),
        ]);

    let scenario = TextColumn::new(MARGIN + 20.0, CONTENT_WIDTH - 40.0, BODY, 20.0);
    let steps = List::new(TextColumn::new(
        MARGIN + 20.0,
        CONTENT_WIDTH - 25.0,
        BODY,
        18.0,
    ))
    .with_marker(Marker::numbered(MARGIN, NUMBER))
    .with_spacing(10.0)
    .with_items([
        "Invest time upfront: Don't rush to extract value. Invest in understanding the other \
         person first.",
        "Follow up consistently: A relationship without follow-up is like a savings account \
         without deposits.",
        "Give before you ask: The most powerful networkers lead with generosity. They're \
         connectors, not collectors.",
        "Play the long game: The best opportunities often come years after the initial \
         connection.",
    ]);

    let math = continuation().with_blocks([
        heading("The Math of Compound Networks", 20.0, 40.0),
        body(
            "Here's a simple illustration. Let's say you meet 10 people at a networking event:",
        ),
        Block::Gap(20.0),
        Block::flow(
            scenario,
            "Transactional approach: You collect 10 business cards. Maybe 2 respond to your \
             follow-up email. One month later, you're back to zero. Net gain: minimal.",
        ),
        Block::Gap(20.0),
        Block::flow(
            scenario,
            "Compound approach: You have 3 meaningful conversations. You follow up thoughtfully \
             with each. Over 6 months, those 3 become trusted connections who each introduce you \
             to 2-3 others in their circle. Net gain: exponential.",
        ),
        Block::Gap(30.0),
        key_insight(
            "The goal isn't to meet more people. It's to build deeper relationships with fewer \
             people who matter. Quality compounds. Quantity dilutes.",
        ),
        heading("How to Build Compound Relationships", 16.0, 30.0),
        steps.into(),
        page_number("7"),
    ]);

    let in_action = continuation().with_blocks([
        heading("The Compound Network in Action", 20.0, 40.0),
        body(
            "Consider this real scenario: A founder in Hyderabad needed to hire a senior \
             operations leader. Instead of posting on job boards, he reached out to three trusted \
             connections he'd built over the years. Within a week, he had five warm introductions \
             to qualified candidates \u{2014} including the person he eventually hired.",
        ),
        Block::Gap(20.0),
        body(
            "The total time spent \"networking\" over those years? Maybe 30 hours of coffee \
             meetings, dinners, and thoughtful follow-ups. The value created from that single \
             hire? Immeasurable.",
        ),
        Block::Gap(20.0),
        strong(
            "That's the compound network effect. Small, consistent investments in relationships \
             paying massive dividends when you need them.",
        ),
        Block::Gap(40.0),
        chapter_summary(
            150.0,
            50.0,
            22.0,
            &[
                "\u{2022} Networks compound like investments \u{2014} small, consistent efforts \
                 yield exponential returns",
                "\u{2022} Transactional relationships extract value once; compound relationships \
                 multiply value",
                "\u{2022} Focus on depth over breadth: fewer, stronger connections beat more, \
                 weaker ones",
                "\u{2022} The best time to build your network is before you need it",
            ],
        ),
        page_number("8"),
    ]);

    [opener, math, in_action]
}

fn five_types() -> [Page; 4] {
    let connection_types = |start: usize, title_advance: f64, items: &[(&str, &str)]| -> Block {
        List::new(TextColumn::new(
            MARGIN + 30.0,
            CONTENT_WIDTH - 30.0,
            SMALL,
            18.0,
        ))
        .with_marker(
            Marker::numbered(MARGIN, style(Face::Display, 24.0, CORAL))
                .counting_from(start, "")
                .raised(5.0),
        )
        .with_title(MARGIN + 30.0, style(Face::BodyBold, 14.0, CHARCOAL), title_advance)
        .with_spacing(title_advance)
        .with_titled_items(items.iter().copied())
        .into()
    };

    let opener = chapter_opener(
        "CHAPTER TWO",
        ["The 5 Types of", "Connections You Need"],
        Some("02"),
    )
    .with_bookmark(chapter_bookmark(2))
    .with_blocks([
        body(
            "Not all connections are created equal. The most effective networks aren't random \
             collections of contacts \u{2014} they're strategically assembled portfolios of \
             relationships that serve different purposes.",
        ),
        Block::Gap(15.0),
        body(
            "Think of your network like an investment portfolio. You wouldn't put all your \
             money in one stock. Similarly, you need diversification in your relationships.",
        ),
        Block::Gap(30.0),
        heading("The 5 Essential Connection Types", 16.0, 35.0),
        connection_types(
            1,
            20.0,
            &[
                (
                    "MENTORS",
                    "People 10-20 years ahead of you in their journey. They've navigated the \
                     challenges you're facing and can offer hard-won wisdom. A good mentor \
                     shortens your learning curve by years.",
                ),
                (
                    "PEERS",
                    "People at your level, fighting similar battles. They understand your \
                     daily challenges in a way mentors can't. Peers provide camaraderie, \
                     fresh perspectives, and mutual support.",
                ),
                (
                    "OPERATORS",
                    "The doers. CAs, lawyers, consultants, contractors \u{2014} people who get \
                     things done. When you need execution, not advice, these are your go-to \
                     connections.",
                ),
            ],
        ),
        page_number("9"),
    ]);

    let balance = continuation().with_blocks([
        connection_types(
            4,
            25.0,
            &[
                (
                    "CONNECTORS",
                    "The super-networkers who know everyone. They may not be experts in any \
                     particular field, but they know exactly who to call for anything. One \
                     connector can unlock dozens of valuable introductions.",
                ),
                (
                    "RISING STARS",
                    "People 5-10 years behind you who are clearly going places. Today's rising \
                     star is tomorrow's industry leader. Investing in these relationships early \
                     creates powerful long-term allies.",
                ),
            ],
        ),
        Block::Gap(15.0),
        heading("Why You Need All Five", 16.0, 30.0),
        body(
            "Most professionals over-index on one type. Founders surround themselves with other \
             founders. Executives cluster with executives. This creates echo chambers and blind \
             spots.",
        ),
        Block::Gap(15.0),
        body("A balanced network gives you:"),
        Block::Gap(15.0),
        bullets(
            MARGIN + 15.0,
            MARGIN + 30.0,
            22.0,
            &[
                "Wisdom from mentors when facing big decisions",
                "Solidarity from peers when times are tough",
                "Execution from operators when you need to get things done",
                "Access from connectors when you need introductions",
                "Fresh energy from rising stars who challenge your assumptions",
            ],
        ),
        page_number("10"),
    ]);

    let mut assessment = continuation().with_blocks([
        heading("Quick Assessment: Your Connection Portfolio", 16.0, 30.0),
        body(
            "Take a moment to mentally count: How many people in each category can you actually \
             call when you need them?",
        ),
        Block::Gap(25.0),
    ]);
    for category in ["Mentors", "Peers", "Operators", "Connectors", "Rising Stars"] {
        assessment.push(
            Group::new(45.0)
                .with(Rect::filled(MARGIN, -35.0, CONTENT_WIDTH, 35.0, CREAM))
                .with(Text::new(category, MARGIN + 15.0, -25.0, ITEM_TITLE))
                .with(Text::new(
                    "Count: _____",
                    WIDTH - MARGIN - 100.0,
                    -25.0,
                    style(Face::Body, 12.0, GRAY),
                )),
        );
    }
    let assessment = assessment.with_blocks([
        Block::Gap(20.0),
        body(
            "If any category has fewer than 3 people, that's a gap worth addressing. The \
             worksheet at the end of this playbook will help you create a plan.",
        ),
        Block::Gap(30.0),
        key_insight(
            "The most valuable network isn't the biggest one \u{2014} it's the most balanced one. \
             Diversify your connections like you'd diversify your investments.",
        ),
        page_number("11"),
    ]);

    let tips = List::new(TextColumn::new(
        MARGIN + 15.0,
        CONTENT_WIDTH - 15.0,
        SMALL,
        16.0,
    ))
    .with_title(MARGIN, NUMBER, 18.0)
    .with_spacing(12.0)
    .with_titled_items([
        (
            "Mentors:",
            "Identify 3 people whose career you admire. Reach out with a specific, thoughtful \
             question \u{2014} not a generic \"can I pick your brain?\"",
        ),
        (
            "Peers:",
            "Join or create a small mastermind group (5-8 people). Meet monthly. Share challenges \
             openly.",
        ),
        (
            "Operators:",
            "Ask your best connections for their go-to service providers. Build a trusted roster \
             before you need them urgently.",
        ),
        (
            "Connectors:",
            "Look for people who seem to know everyone. Offer value first \u{2014} connectors \
             remember who helps them.",
        ),
        (
            "Rising Stars:",
            "Mentor someone. Speak at colleges or industry events. The ambitious ones will find \
             you.",
        ),
    ]);

    let practical = continuation().with_blocks([
        heading("Practical Application", 20.0, 40.0),
        body("Here's how to start building each type of connection:"),
        Block::Gap(20.0),
        tips.into(),
        Block::Gap(20.0),
        chapter_summary(
            130.0,
            50.0,
            22.0,
            &[
                "\u{2022} Your network needs 5 types: Mentors, Peers, Operators, Connectors, \
                 Rising Stars",
                "\u{2022} Each type serves a different purpose \u{2014} you need all five for a \
                 complete portfolio",
                "\u{2022} Most professionals over-index on peers and under-index on the other four",
                "\u{2022} Audit your current network and intentionally fill the gaps",
            ],
        ),
        page_number("12"),
    ]);

    [opener, balance, assessment, practical]
}

fn quality_over_quantity() -> [Page; 3] {
    let opener = chapter_opener(
        "CHAPTER THREE",
        ["Quality Over Quantity:", "The Curated Circle"],
        Some("03"),
    )
    .with_bookmark(chapter_bookmark(3))
    .with_blocks([
        body(
            "Here's a counterintuitive truth: the people with the strongest networks often have \
             the fewest LinkedIn connections.",
        ),
        Block::Gap(15.0),
        body(
            "Why? Because they understand that networking isn't a numbers game. It's a trust \
             game. And trust doesn't scale infinitely.",
        ),
        Block::Gap(25.0),
        heading("The Dunbar Number", 16.0, 30.0),
        body(
            "Anthropologist Robin Dunbar famously proposed that humans can only maintain about \
             150 stable relationships. But here's what most people miss: within that 150, there \
             are layers:",
        ),
        Block::Gap(20.0),
        bullets(
            MARGIN + 15.0,
            MARGIN + 30.0,
            22.0,
            &[
                "5 intimate connections (your inner circle)",
                "15 close friends (people you'd call in a crisis)",
                "50 good friends (people you'd invite to a party)",
                "150 meaningful contacts (people whose names you know)",
            ],
        ),
        Block::Gap(15.0),
        body(
            "Most networking advice ignores this biological reality. It tells you to \"expand \
             your network\" without acknowledging that expansion dilutes depth.",
        ),
        page_number("13"),
    ]);

    let inner_circle = continuation().with_blocks([
        heading("The 30-Person Inner Circle", 20.0, 40.0),
        body(
            "If you could only maintain 30 professional relationships for the rest of your life, \
             who would make the cut? This thought experiment reveals something important: most \
             of us spread ourselves too thin.",
        ),
        Block::Gap(15.0),
        body(
            "The goal isn't to limit yourself to 30 people. It's to recognize that your inner \
             circle \u{2014} the people you invest the most in \u{2014} should be intentionally \
             curated.",
        ),
        Block::Gap(25.0),
        heading("Criteria for Your Inner Circle", 16.0, 30.0),
        titled_points(
            ">",
            18.0,
            8.0,
            &[
                (
                    "Mutual respect",
                    "You genuinely admire something about them, and vice versa.",
                ),
                (
                    "Complementary strengths",
                    "They bring something to the table that you don't.",
                ),
                (
                    "Shared values",
                    "You operate with similar ethics and principles.",
                ),
                (
                    "Reciprocity",
                    "The relationship flows both ways \u{2014} giving and receiving.",
                ),
                (
                    "Long-term orientation",
                    "They're playing the infinite game, not the short-term one.",
                ),
            ],
        ),
        Block::Gap(20.0),
        panel(70.0, 70.0)
            .with(Text::new(
                "\"You are the average of the five people you spend the most time with.\" \
                 \u{2014} Jim Rohn",
                MARGIN + 20.0,
                -40.0,
                style(Face::DisplayItalic, 14.0, CHARCOAL),
            ))
            .into(),
        page_number("14"),
    ]);

    let curation_points = List::new(TextColumn::new(
        MARGIN + 30.0,
        CONTENT_WIDTH - 35.0,
        BODY,
        18.0,
    ))
    .with_marker(Marker::glyph("\u{2022}", MARGIN + 15.0, BULLET))
    .with_spacing(8.0)
    .with_items([
        "Saying no to networking events that don't align with your goals",
        "Letting some relationships naturally fade to make room for more valuable ones",
        "Investing deeply in fewer people rather than superficially in many",
        "Being selective about who you spend your limited time with",
    ]);

    let mindset = continuation().with_blocks([
        heading("The Curation Mindset", 20.0, 40.0),
        body(
            "Curating your network isn't about being exclusive or elitist. It's about being \
             intentional. It's recognizing that your time and energy are finite, and investing \
             them wisely.",
        ),
        Block::Gap(15.0),
        body("This means:"),
        Block::Gap(15.0),
        curation_points.into(),
        Block::Gap(30.0),
        chapter_summary(
            130.0,
            50.0,
            22.0,
            &[
                "\u{2022} The Dunbar number limits meaningful relationships to ~150, with only \
                 15-30 being truly close",
                "\u{2022} Quality always beats quantity \u{2014} 30 curated relationships \
                 outperform 300 random ones",
                "\u{2022} Your inner circle should be intentionally curated using clear criteria",
                "\u{2022} Curation isn't elitism \u{2014} it's strategic allocation of your \
                 limited time and energy",
            ],
        ),
        page_number("15"),
    ]);

    [opener, inner_circle, mindset]
}

fn where_people_meet() -> [Page; 3] {
    let opener = chapter_opener(
        "CHAPTER FOUR",
        ["Where High-Value", "People Actually Meet"],
        Some("04"),
    )
    .with_bookmark(chapter_bookmark(4))
    .with_blocks([
        body(
            "Here's a secret that experienced networkers know: the best connections rarely \
             happen at \"networking events.\"",
        ),
        Block::Gap(15.0),
        body(
            "Think about it. When everyone in the room is explicitly there to network, the \
             dynamic becomes transactional by default. Everyone's scanning name tags, \
             calculating what they can get from each interaction.",
        ),
        Block::Gap(15.0),
        strong(
            "The most meaningful connections happen in contexts where networking isn't the \
             primary purpose.",
        ),
        Block::Gap(30.0),
        heading("High-Value Contexts", 16.0, 30.0),
        titled_points(
            ">",
            18.0,
            12.0,
            &[
                (
                    "Shared experiences",
                    "Travel, adventure trips, retreats. Bonding happens naturally when you're \
                     out of your comfort zone together.",
                ),
                (
                    "Learning environments",
                    "Executive education programs, workshops, masterminds. People are more open \
                     when they're in learning mode.",
                ),
                (
                    "Giving contexts",
                    "Charity boards, mentorship programs, industry associations. Generosity \
                     reveals character.",
                ),
                (
                    "Interest-based communities",
                    "Golf clubs, wine societies, book clubs. Shared passions create organic \
                     connection points.",
                ),
            ],
        ),
        page_number("16"),
    ]);

    let landscape = continuation().with_blocks([
        heading("The Hyderabad Landscape", 20.0, 40.0),
        body(
            "In Hyderabad specifically, high-value professionals tend to gather in certain \
             places:",
        ),
        Block::Gap(20.0),
        bullets(
            MARGIN + 15.0,
            MARGIN + 30.0,
            24.0,
            &[
                "Private clubs in Jubilee Hills and Banjara Hills",
                "Executive education programs at ISB and other institutions",
                "Invite-only dinners and salon-style gatherings",
                "Industry-specific forums and associations",
                "High-end fitness and wellness communities",
                "Curated communities like LUME",
            ],
        ),
        Block::Gap(20.0),
        body(
            "The common thread? These are all contexts where people have opted in, passed some \
             filter, and share something beyond just wanting to \"network.\"",
        ),
        Block::Gap(30.0),
        key_insight(
            "Stop looking for networking events. Start looking for contexts where your ideal \
             connections naturally gather \u{2014} and where the activity itself filters for \
             quality.",
        ),
        page_number("17"),
    ]);

    let actions = List::new(TextColumn::new(
        MARGIN + 25.0,
        CONTENT_WIDTH - 25.0,
        BODY,
        18.0,
    ))
    .with_marker(Marker::numbered(MARGIN, NUMBER))
    .with_spacing(15.0)
    .with_items([
        "Identify 3 high-value contexts where your ideal connections naturally gather",
        "Commit to one new community or group this quarter",
        "Reduce time spent at generic networking events by 50%",
        "Look for invite-only or curated experiences over open events",
    ]);

    let action_steps = continuation().with_blocks([
        heading("Action Steps", 20.0, 40.0),
        actions.into(),
        Block::Gap(30.0),
        chapter_summary(
            130.0,
            50.0,
            22.0,
            &[
                "\u{2022} The best connections rarely happen at \"networking events\"",
                "\u{2022} High-value people gather in contexts with shared experiences, learning, \
                 or interests",
                "\u{2022} Look for invite-only or curated communities with natural filters",
                "\u{2022} The activity itself should filter for quality \u{2014} not just proximity",
            ],
        ),
        page_number("18"),
    ]);

    [opener, landscape, action_steps]
}

fn warm_introductions() -> [Page; 2] {
    let template = Group::new(100.0)
        .with(Rect::filled(MARGIN, -100.0, CONTENT_WIDTH, 100.0, CREAM))
        .with(Element::paragraph(
            TextColumn::new(
                MARGIN + 20.0,
                CONTENT_WIDTH - 40.0,
                style(Face::DisplayItalic, 11.0, CHARCOAL),
                18.0,
            )
            .paragraph(
                "\"Hey [Name], I know someone who might be valuable for you to meet \u{2014} \
                 [Person] is [brief context]. Would you be open to an intro? No pressure either \
                 way.\"",
            ),
            -25.0,
        ));

    let opener = chapter_opener("CHAPTER FIVE", ["The Art of the", "Warm Introduction"], Some("05"))
        .with_bookmark(chapter_bookmark(5))
        .with_blocks([
            body(
                "Cold outreach has a 1-2% response rate. Warm introductions? Closer to 50-80%. \
                 That's not a marginal difference \u{2014} it's a different game entirely.",
            ),
            Block::Gap(15.0),
            body(
                "A warm introduction carries trust. When someone vouches for you, they're lending \
                 you their reputation. That's why the best networkers focus on earning and \
                 facilitating warm intros rather than cold outreach.",
            ),
            Block::Gap(25.0),
            heading("The Double Opt-In Introduction", 16.0, 30.0),
            body(
                "Never connect two people without asking both first. The double opt-in \
                 introduction respects everyone's time and ensures genuine interest on both \
                 sides.",
            ),
            Block::Gap(20.0),
            Block::line("Template:", MARGIN, NUMBER, 25.0),
            template.into(),
            page_number("19"),
        ]);

    let asking = continuation().with_blocks([
        heading("How to Ask for an Introduction", 20.0, 40.0),
        body(
            "When asking for an intro, make it easy for the connector. Give them everything they \
             need:",
        ),
        Block::Gap(20.0),
        titled_points(
            ">",
            18.0,
            12.0,
            &[
                (
                    "Be specific",
                    "Don't ask for \"anyone in real estate.\" Ask for \"someone who has \
                     experience with commercial property development in Hyderabad.\"",
                ),
                (
                    "Explain why",
                    "Why do you want this connection? What value can you offer them in return?",
                ),
                (
                    "Make it forwardable",
                    "Write a brief paragraph about yourself that your connector can forward \
                     directly.",
                ),
                (
                    "Remove friction",
                    "Offer to draft the intro email. Make it as easy as possible for them to say \
                     yes.",
                ),
            ],
        ),
        Block::Gap(20.0),
        chapter_summary(
            110.0,
            50.0,
            20.0,
            &[
                "\u{2022} Warm intros have 50-80% response rates vs. 1-2% for cold outreach",
                "\u{2022} Always use double opt-in \u{2014} ask both parties before connecting them",
                "\u{2022} When asking for intros: be specific, explain why, make it forwardable",
                "\u{2022} The best networkers are connectors themselves \u{2014} give intros \
                 generously",
            ],
        ),
        page_number("20"),
    ]);

    [opener, asking]
}

fn ninety_day_system() -> [Page; 2] {
    let timeline = List::new(TextColumn::new(
        MARGIN + 10.0,
        CONTENT_WIDTH - 15.0,
        style(Face::Body, 10.0, DARK_GRAY),
        14.0,
    ))
    .with_title(MARGIN, style(Face::BodyBold, 11.0, CORAL), 16.0)
    .with_spacing(10.0)
    .with_titled_items([
        (
            "Day 1-2:",
            "Send a personalized follow-up. Reference something specific from your conversation. \
             Add value if possible (an article, an intro, a resource).",
        ),
        (
            "Week 2:",
            "Share something relevant \u{2014} an article, a podcast, or news that connects to \
             what you discussed.",
        ),
        (
            "Week 4:",
            "Suggest a coffee or call to continue the conversation. Be specific about what you'd \
             like to discuss.",
        ),
        (
            "Week 8:",
            "Introduce them to someone in your network who might be valuable. Give before asking.",
        ),
        (
            "Week 12:",
            "By now, you should have had 2-3 meaningful interactions. The foundation is set.",
        ),
    ]);

    let opener = chapter_opener(
        "CHAPTER SIX",
        ["From Contact to Connection:", "The 90-Day System"],
        Some("06"),
    )
    .with_bookmark(chapter_bookmark(6))
    .with_blocks([
        body(
            "You met someone interesting. You exchanged contact info. Now what? This is where \
             most networking efforts die \u{2014} in the gap between first meeting and real \
             relationship.",
        ),
        Block::Gap(15.0),
        body(
            "The 90-Day System gives you a framework for turning a first meeting into a lasting \
             connection. It's simple, systematic, and it works.",
        ),
        Block::Gap(25.0),
        heading("The Timeline", 16.0, 30.0),
        timeline.into(),
        page_number("21"),
    ]);

    let principles = continuation().with_blocks([
        heading("The Key Principles", 20.0, 40.0),
        titled_points(
            ">",
            20.0,
            15.0,
            &[
                (
                    "Be consistent, not intense",
                    "Multiple light touches beat one heavy push. Don't overwhelm \u{2014} stay \
                     present.",
                ),
                (
                    "Add value every time",
                    "Every interaction should give something. Don't just \"check in\" \u{2014} \
                     bring something useful.",
                ),
                (
                    "Be patient",
                    "Relationships take time. Don't rush to ask for favors. Build trust first.",
                ),
                (
                    "Keep notes",
                    "Track what you discussed, their interests, their challenges. \
                     Personalization is powerful.",
                ),
            ],
        ),
        Block::Gap(20.0),
        chapter_summary(
            110.0,
            50.0,
            20.0,
            &[
                "\u{2022} The 90-day system: Day 1 follow-up > Week 2 value > Week 4 meeting > \
                 Week 8 intro",
                "\u{2022} Consistency beats intensity \u{2014} multiple light touches over time",
                "\u{2022} Always add value \u{2014} never just \"check in\" without bringing \
                 something useful",
                "\u{2022} Keep notes on every contact to enable meaningful personalization",
            ],
        ),
        page_number("22"),
    ]);

    [opener, principles]
}

fn common_mistakes() -> [Page; 2] {
    let opener = chapter_opener(
        "CHAPTER SEVEN",
        ["Common Mistakes That", "Kill Your Reputation"],
        Some("07"),
    )
    .with_bookmark(chapter_bookmark(7))
    .with_blocks([
        body(
            "Your reputation is your most valuable networking asset. It takes years to build and \
             minutes to destroy. Here are the mistakes that silently kill your reputation in \
             professional circles:",
        ),
        Block::Gap(25.0),
        titled_points(
            "X",
            18.0,
            15.0,
            &[
                (
                    "The Premature Pitch",
                    "Asking for business or favors before building any relationship. You've \
                     just met \u{2014} slow down.",
                ),
                (
                    "The Name Dropper",
                    "Constantly mentioning who you know to inflate your importance. It's \
                     transparent and off-putting.",
                ),
                (
                    "The Ghost",
                    "Not following up, not responding to messages, disappearing after getting \
                     what you wanted.",
                ),
                (
                    "The Taker",
                    "Always asking, never giving. People notice when the relationship only flows \
                     one way.",
                ),
                (
                    "The Oversharer",
                    "Sharing confidential information to seem \"in the know.\" If you'll share \
                     their secrets, you'll share mine.",
                ),
            ],
        ),
        page_number("23"),
    ]);

    let antidotes = List::new(TextColumn::single_line(MARGIN + 35.0, BODY, 24.0))
        .with_marker(Marker::glyph(">", MARGIN + 15.0, BULLET))
        .with_items([
            "Lead with generosity \u{2014} give before you ask",
            "Keep your promises \u{2014} small and large",
            "Respect confidentiality \u{2014} always",
            "Follow up consistently \u{2014} don't disappear",
            "Make quality introductions \u{2014} or none at all",
        ]);

    let remedies = continuation().with_blocks([
        titled_points(
            "X",
            18.0,
            15.0,
            &[
                (
                    "The Poor Introducer",
                    "Making sloppy introductions without context, without asking permission, or \
                     to people who aren't a fit.",
                ),
                (
                    "The Follow-Up Failure",
                    "Promising to send something and never doing it. Small broken promises add \
                     up.",
                ),
            ],
        ),
        Block::Gap(10.0),
        heading("The Antidotes", 16.0, 30.0),
        antidotes.into(),
        Block::Gap(20.0),
        chapter_summary(
            90.0,
            45.0,
            18.0,
            &[
                "\u{2022} Your reputation is your most valuable networking asset \u{2014} protect it",
                "\u{2022} Avoid: premature pitching, name dropping, ghosting, taking without giving",
                "\u{2022} Lead with generosity, keep promises, respect confidentiality",
            ],
        ),
        page_number("24"),
    ]);

    [opener, remedies]
}

fn audit_worksheet() -> [Page; 2] {
    let part = style(Face::BodyBold, 14.0, CHARCOAL);
    let prompt = style(Face::Body, 10.0, GRAY);

    let mut portfolio = chapter_opener(
        "CHAPTER EIGHT",
        ["Your Network Audit", "Worksheet"],
        Some("08"),
    )
    .with_bookmark(chapter_bookmark(8))
    .with_blocks([
        body(
            "Use this worksheet to assess your current network and create an action plan. Be \
             honest \u{2014} the gaps you identify are opportunities.",
        ),
        Block::Gap(25.0),
        Block::line("Part 1: Connection Portfolio Audit", MARGIN, part, 25.0),
    ]);
    for category in ["Mentors", "Peers", "Operators", "Connectors", "Rising Stars"] {
        portfolio.push(
            Group::new(70.0)
                .with(Rect::filled(MARGIN, -60.0, CONTENT_WIDTH, 60.0, CREAM))
                .with(Text::new(category, MARGIN + 15.0, -20.0, ITEM_TITLE))
                .with(Text::new(
                    "Names: ________________________________",
                    MARGIN + 15.0,
                    -40.0,
                    prompt,
                ))
                .with(Text::new(
                    "Gap score (1-10): ___",
                    WIDTH - MARGIN - 120.0,
                    -20.0,
                    prompt,
                )),
        );
    }
    portfolio.push(page_number("25"));

    let depth = List::new(TextColumn::single_line(MARGIN + 25.0, prompt, 22.0))
        .with_marker(Marker::numbered(MARGIN, style(Face::Body, 11.0, CORAL)))
        .with_items(
            std::iter::repeat("Name: _________________ Depth: ___ Last contact: _______").take(10),
        );

    let mut action_plan = List::new(TextColumn::single_line(
        MARGIN,
        style(Face::Body, 11.0, GRAY),
        30.0,
    ))
    .with_title(MARGIN, style(Face::Body, 11.0, CHARCOAL), 18.0);
    for question in [
        "Which connection type is your biggest gap?",
        "Name 3 people you want to deepen relationships with:",
        "What communities will you join this quarter?",
        "Who will you reach out to this week?",
    ] {
        action_plan = action_plan.with_item(ListItem::titled(
            question,
            "_____________________________________________",
        ));
    }

    let assessment = continuation().with_blocks([
        Block::line("Part 2: Relationship Depth Assessment", MARGIN, part, 30.0),
        Block::flow(
            TextColumn::new(MARGIN, CONTENT_WIDTH, SMALL, 18.0),
            "List your 10 most important professional relationships. Rate the depth of each \
             (1-10):",
        ),
        Block::Gap(20.0),
        depth.into(),
        Block::Gap(25.0),
        Block::line("Part 3: Action Plan", MARGIN, part, 25.0),
        action_plan.into(),
        page_number("26"),
    ]);

    [portfolio, assessment]
}

fn the_shortcut() -> Page {
    let benefits = List::new(TextColumn::single_line(
        MARGIN + 35.0,
        style(Face::Body, 13.0, WHITE),
        26.0,
    ))
    .with_marker(Marker::glyph("\u{2022}", MARGIN + 15.0, BULLET))
    .with_items([
        "Pre-vetted connections (the hard work is done)",
        "Built-in contexts for meaningful interaction",
        "Accountability to actually show up",
        "A reputation boost by association",
        "Accelerated relationship building",
    ]);

    Page::new()
        .with_background(CHARCOAL)
        .with_bookmark(chapter_bookmark(9))
        .with_blocks([
            Block::Fixed(top_rule(WIDTH, HEIGHT, 4.0)),
            Block::MoveTo(HEIGHT - 100.0),
            Block::line("THE SHORTCUT", MARGIN, style(Face::BodyBold, 12.0, CORAL), 50.0),
            Block::line(
                "Why Curated Communities Win",
                MARGIN,
                style(Face::Display, 32.0, WHITE),
                50.0,
            ),
            Block::flow(
                TextColumn::new(MARGIN, CONTENT_WIDTH, style(Face::Body, 14.0, MIST), 24.0),
                "Everything in this playbook works. If you apply these principles consistently \
                 for 2-3 years, you'll build a network that transforms your career and business.",
            ),
            Block::Gap(15.0),
            Block::flow(
                TextColumn::new(MARGIN, CONTENT_WIDTH, style(Face::BodyBold, 14.0, WHITE), 24.0),
                "But there's a shortcut: join a community where the curation has already been \
                 done.",
            ),
            Block::Gap(20.0),
            Block::line(
                "The right curated community gives you:",
                MARGIN,
                style(Face::Body, 13.0, MIST),
                30.0,
            ),
            benefits.into(),
            page_number("27"),
        ])
}

fn call_to_action() -> Page {
    let offer = List::new(TextColumn::single_line(
        MARGIN + 40.0,
        style(Face::Body, 14.0, WHITE),
        28.0,
    ))
    .with_marker(Marker::glyph(">", MARGIN + 15.0, POINTER))
    .with_items([
        "2 curated gatherings every month",
        "Concierge access for your business needs",
        "Direct consulting with our founder",
        "A vetted network of high-value professionals",
    ]);

    let apply = Group::new(100.0)
        .with(Rect::filled(MARGIN, -100.0, CONTENT_WIDTH, 100.0, CORAL))
        .with(Text::new(
            "Ready to skip the trial-and-error?",
            MARGIN + 30.0,
            -35.0,
            style(Face::Display, 18.0, WHITE),
        ))
        .with(Text::new(
            "Apply for LUME membership today.",
            MARGIN + 30.0,
            -60.0,
            style(Face::Body, 14.0, WHITE),
        ))
        .with(Text::new(
            format!("{}/apply", SITE),
            MARGIN + 30.0,
            -85.0,
            style(Face::BodyBold, 12.0, WHITE),
        ));

    Page::new().with_background(CHARCOAL).with_blocks([
        Block::Fixed(top_rule(WIDTH, HEIGHT, 4.0)),
        Block::MoveTo(HEIGHT - 150.0),
        Block::line(
            "LUME is that community.",
            MARGIN,
            style(Face::Display, 28.0, CORAL),
            50.0,
        ),
        Block::flow(
            TextColumn::new(MARGIN, CONTENT_WIDTH, style(Face::Body, 14.0, MIST), 24.0),
            "We've built what this playbook describes: a curated community of founders, \
             executives, and professionals in Hyderabad who are serious about relationships that \
             compound.",
        ),
        Block::Gap(30.0),
        offer.into(),
        Block::Gap(40.0),
        apply.into(),
        page_number("28"),
    ])
}

fn back_cover() -> Page {
    Page::new().with_background(BLACK).with_blocks([
        Block::Fixed(text(
            "LUME",
            WIDTH / 2.0 - 50.0,
            HEIGHT / 2.0 + 50.0,
            style(Face::Display, 36.0, WHITE),
        )),
        Block::Fixed(text(
            "Your network, amplified.",
            WIDTH / 2.0 - 85.0,
            HEIGHT / 2.0,
            style(Face::DisplayItalic, 14.0, GRAY),
        )),
        Block::Fixed(text(
            SITE,
            WIDTH / 2.0 - 55.0,
            80.0,
            style(Face::Body, 11.0, GRAY),
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontSet;
    use crate::render::{compose_page, DrawOp};

    fn composed(page: usize) -> Vec<DrawOp> {
        let document = document();
        compose_page(&document.pages()[page], &FontSet::standard(), PAGE)
    }

    fn find<'a>(ops: &'a [DrawOp], content: &str) -> &'a Text {
        ops.iter()
            .filter_map(DrawOp::as_text)
            .find(|text| text.content == content)
            .unwrap_or_else(|| panic!("'{}' not drawn", content))
    }

    #[test]
    fn has_twenty_eight_pages() {
        assert_eq!(document().pages().len(), 28);
    }

    #[test]
    fn bookmarks_point_at_section_openers() {
        let pages: Vec<usize> = document()
            .bookmarks()
            .iter()
            .map(|bookmark| bookmark.page)
            .collect();
        assert_eq!(pages, vec![3, 5, 8, 12, 15, 18, 20, 22, 24, 26]);
        assert_eq!(
            document().bookmarks()[1].title,
            "01. The Compound Network Effect"
        );
    }

    #[test]
    fn page_labels_run_from_four_to_twenty_eight() {
        let document = document();
        for (index, page) in document.pages().iter().enumerate().skip(2).take(25) {
            let ops = compose_page(page, &FontSet::standard(), PAGE);
            let label = (index + 2).to_string();
            let text = find(&ops, &label);
            assert_eq!((text.x, text.y), (WIDTH / 2.0, 40.0), "page {}", index + 1);
        }
    }

    #[test]
    fn cover_subtitle_wraps_below_the_title() {
        let ops = composed(0);
        let subtitle: Vec<&Text> = ops
            .iter()
            .filter_map(DrawOp::as_text)
            .filter(|text| text.style.face == Face::DisplayItalic)
            .collect();

        assert!(subtitle.len() >= 2);
        assert_eq!(subtitle[0].y, HEIGHT - 480.0);
        assert_eq!(subtitle[1].y, HEIGHT - 506.0);
        assert!(subtitle[0].content.starts_with("How Hyderabad's"));
    }

    #[test]
    fn chapter_opener_draws_the_watermark_behind_the_band() {
        let ops = composed(4);
        let watermark = ops
            .iter()
            .position(|op| op.as_text().map(|text| text.content.as_str()) == Some("01"))
            .expect("watermark drawn");
        let band = ops
            .iter()
            .position(|op| op.as_rect().map(|rect| rect.height) == Some(160.0))
            .expect("band drawn");
        assert!(watermark < band);

        let kicker = find(&ops, "CHAPTER ONE");
        assert_eq!((kicker.x, kicker.y), (MARGIN, HEIGHT - 80.0));
        let title = find(&ops, "Network Effect");
        assert_eq!(title.y, HEIGHT - 145.0);
    }

    #[test]
    fn introduction_has_no_watermark() {
        let ops = composed(2);
        assert!(ops
            .iter()
            .filter_map(DrawOp::as_text)
            .all(|text| text.style.size != 120.0));
    }

    #[test]
    fn contents_rows_step_down_evenly() {
        let ops = composed(1);
        let intro = find(&ops, "Introduction: Why Your Network Isn't Working");
        assert_eq!((intro.x, intro.y), (MARGIN, HEIGHT - 180.0));
        assert_eq!(intro.style.face, Face::BodyBold);

        let chapter = find(&ops, "The Compound Network Effect");
        assert_eq!((chapter.x, chapter.y), (MARGIN + 40.0, HEIGHT - 216.0));

        let last = find(&ops, "31");
        assert_eq!((last.x, last.y), (WIDTH - MARGIN - 20.0, HEIGHT - 180.0 - 36.0 * 9.0));
    }

    #[test]
    fn worksheet_numbers_ten_relationships() {
        let ops = composed(24);
        let first = find(&ops, "1.");
        let tenth = find(&ops, "10.");
        assert_eq!(first.y - tenth.y, 22.0 * 9.0);
        assert_eq!(first.x, MARGIN);
    }

    #[test]
    fn back_cover_is_black_and_centred() {
        let ops = composed(27);
        assert_eq!(
            ops[0].as_rect().and_then(|rect| rect.fill),
            Some(BLACK)
        );
        let site = find(&ops, SITE);
        assert_eq!((site.x, site.y), (WIDTH / 2.0 - 55.0, 80.0));
    }
}
