//! Reply composition.
//!
//! Pure functions from intent data to outbound messages. Every reply carries
//! the genre quick-reply menu so the user can always start another pick.

use crate::domain::messaging::{
    truncate_chars, Action, CarouselColumn, CarouselTemplate, Message, QuickReply, Template,
    TemplateMessage, TextMessage, MAX_COLUMN_TITLE_CHARS,
};
use crate::domain::movie::Movie;

use super::intent::{GENRE_TRIGGERS, TRIGGER_SYNOPSIS};

pub const GREETING_TEXT: &str = "สวัสดีครับ! หากคุณนึกไม่ออกว่าจะดูอะไร เราจะช่วยคุณเอง!";
pub const CAROUSEL_ALT_TEXT: &str = "ส่งหนังให้คุณ";
pub const ENJOY_TEXT: &str = "หวังว่าคุณจะชอบนะ";
pub const SYNOPSIS_LABEL: &str = "เรื่องย่อ";
pub const SYNOPSIS_PREFIX: &str = "เรื่องย่อ: ";
pub const NO_MOVIE_YET_TEXT: &str = "ยังไม่มีหนังที่สุ่มมา";
pub const NO_OVERVIEW_TEXT: &str = "ยังไม่มีเรื่องย่อของหนังเรื่องนี้";
pub const FETCH_ERROR_TEXT: &str = "เกิดข้อผิดพลาดไม่สามารถดึงข้อมูลหนังได้ ลองใหม่อีกครั้ง";
pub const DELIVERY_ERROR_TEXT: &str = "เกิดข้อผิดพลาดในการส่งข้อความ";

/// Column body text; the platform requires a non-empty value.
const COLUMN_TEXT: &str = "  ";

/// Number of identical carousel columns per movie.
const CAROUSEL_COLUMNS: usize = 2;

/// The four genre shortcuts attached to every reply.
pub fn genre_menu() -> QuickReply {
    QuickReply::from_labels(GENRE_TRIGGERS)
}

fn text_with_menu(text: impl Into<String>) -> Message {
    TextMessage::new(text).with_quick_reply(genre_menu()).into()
}

/// Welcome message for a new follower.
pub fn greeting() -> Vec<Message> {
    vec![text_with_menu(GREETING_TEXT)]
}

/// Carousel presenting `movie`, followed by a short note with the menu.
pub fn movie_carousel(movie: &Movie, image_base_url: &str) -> Vec<Message> {
    let column = CarouselColumn {
        thumbnail_image_url: movie.poster_url(image_base_url),
        title: Some(truncate_chars(movie.title.clone(), MAX_COLUMN_TITLE_CHARS)),
        text: COLUMN_TEXT.to_string(),
        actions: vec![Action::message(SYNOPSIS_LABEL, TRIGGER_SYNOPSIS)],
    };

    let carousel = TemplateMessage {
        alt_text: CAROUSEL_ALT_TEXT.to_string(),
        template: Template::Carousel(CarouselTemplate {
            columns: vec![column; CAROUSEL_COLUMNS],
        }),
        quick_reply: None,
    };

    vec![carousel.into(), text_with_menu(ENJOY_TEXT)]
}

/// Synopsis of the last movie shown, or a note that none was shown yet.
pub fn synopsis(last_movie: Option<&Movie>) -> Vec<Message> {
    let text = match last_movie {
        None => NO_MOVIE_YET_TEXT.to_string(),
        Some(movie) if !movie.has_overview() => NO_OVERVIEW_TEXT.to_string(),
        Some(movie) => format!("{}{}", SYNOPSIS_PREFIX, movie.overview),
    };
    vec![text_with_menu(text)]
}

/// Parrots unrecognized text back.
pub fn echo(text: &str) -> Vec<Message> {
    vec![text_with_menu(text)]
}

/// Substituted when the catalog lookup fails.
pub fn fetch_error() -> Vec<Message> {
    vec![text_with_menu(FETCH_ERROR_TEXT)]
}

/// Substituted when sending the movie carousel fails.
pub fn delivery_error() -> Vec<Message> {
    vec![text_with_menu(DELIVERY_ERROR_TEXT)]
}
