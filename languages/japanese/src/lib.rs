pub mod alignment;
mod html;
pub mod jisho;
pub mod kanjidamage;
pub mod link_index;

#[cfg(test)]
mod tests;

pub use alignment::{Aligned, ReadingMarkup, RubyText, align};
pub use jisho::{Jisho, parse_word_page};
pub use kanjidamage::{DetailPage, GlyphSource, KanjiDamage, parse_detail_page};
pub use link_index::{load_link_index, parse_link_index};
