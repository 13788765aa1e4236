// tests/card.rs
use std::time::Duration;

use quotes_scrape::data::NormalizedQuote;
use quotes_scrape::viewer::{Card, Typewriter};

fn nasty() -> NormalizedQuote {
    NormalizedQuote {
        id: "x".into(),
        text: "</script><script>alert('t')</script>".into(),
        author: "<img src=x onerror=\"boom\">".into(),
        tags: vec!["<b>bold</b>".into(), "a&b".into()],
        source: "quotes.toscrape.com".into(),
    }
}

#[test]
fn html_card_escapes_author_and_tags() {
    let q = nasty();
    let html = Card::from(&q).to_html(Duration::from_millis(20));

    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=&quot;boom&quot;&gt;"));
    assert!(html.contains("<span class=\"tag\">&lt;b&gt;bold&lt;/b&gt;</span>"));
    assert!(html.contains("<span class=\"tag\">a&amp;b</span>"));
}

#[test]
fn html_card_text_cannot_break_out_of_script() {
    let q = nasty();
    let html = Card::from(&q).to_html(Duration::from_millis(20));

    // exactly one script element: ours
    assert_eq!(html.matches("<script>").count(), 1);
    assert_eq!(html.matches("</script>").count(), 1);
    assert!(html.contains("setTimeout(typeChar, 20)"));
    assert!(html.contains("textContent"));
}

#[test]
fn typewriter_reveals_one_char_per_delay() {
    let tw = Typewriter::new(Duration::from_millis(20));
    let text = "héllo";

    assert_eq!(tw.reveal_at(text, Duration::ZERO), "");
    assert_eq!(tw.reveal_at(text, Duration::from_millis(19)), "");
    assert_eq!(tw.reveal_at(text, Duration::from_millis(40)), "hé");
    assert_eq!(tw.reveal_at(text, Duration::from_millis(100)), "héllo");
    assert_eq!(tw.reveal_at(text, Duration::from_secs(60)), "héllo");
}

#[test]
fn zero_delay_shows_everything() {
    let tw = Typewriter::new(Duration::ZERO);
    assert_eq!(tw.reveal_at("abc", Duration::ZERO), "abc");
    assert!(tw.is_done("abc"));
}
