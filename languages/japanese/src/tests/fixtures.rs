//! Trimmed-down copies of the two sites' page layouts

pub const JISHO_SEARCH_URL: &str = "https://jisho.org/search/";
pub const KANJIDMG_BASE_URL: &str = "http://www.kanjidamage.com";

pub const JISHO_KYOUDAI: &str = r#"<!DOCTYPE html>
<html><body>
<div id="page_container">
<div id="main_results">
 <div class="concept_light clearfix">
  <div class="concept_light-wrapper columns zero-padding">
   <div class="concept_light-readings japanese japanese_gothic" lang="ja">
    <div class="concept_light-representation">
     <span class="furigana">
      <span class="kanji-2-up kanji">きょう</span><span class="kanji-1-up kanji">だい</span>
     </span>
     <span class="text">
      兄弟
     </span>
    </div>
   </div>
  </div>
  <div class="concept_light-meanings medium-9 columns">
   <div class="meanings-wrapper">
    <div class="meaning-tags">Noun</div>
    <div class="meaning-wrapper"><div class="meaning-definition zero-padding"><span class="meaning-definition-section_divider">1. </span><span class="meaning-meaning">siblings; brothers and sisters</span></div></div>
    <div class="meaning-wrapper"><div class="meaning-definition zero-padding"><span class="meaning-definition-section_divider">2. </span><span class="meaning-meaning">brothers</span></div></div>
    <div class="meaning-tags">Noun, Suffix</div>
    <div class="meaning-wrapper"><div class="meaning-definition zero-padding"><span class="meaning-definition-section_divider">3. </span><span class="meaning-meaning">mate; friend</span></div></div>
    <div class="meaning-tags">Other forms</div>
    <div class="meaning-wrapper"><div class="meaning-definition zero-padding"><span class="meaning-meaning">兄弟 【けいてい】</span></div></div>
   </div>
  </div>
 </div>
 <div class="concept_light clearfix">
  <div class="concept_light-wrapper columns zero-padding">
   <div class="concept_light-readings japanese japanese_gothic" lang="ja">
    <div class="concept_light-representation"><span class="text">兄弟子</span></div>
   </div>
  </div>
 </div>
</div>
<div id="secondary" class="large-4 columns">
 <div class="kanji_light_block">
  <div class="entry kanji_light clearfix">
   <div class="kanji_light_content">
    <div class="literal_block"><span class="character literal japanese_gothic"><a href="//jisho.org/search/%E5%85%84%20%23kanji">兄</a></span></div>
    <div class="meanings english sense"><span>elder brother, </span><span>big brother</span></div>
    <div class="kun readings"><span class="type">Kun:</span> <span class="japanese_gothic"><a href="//jisho.org/search/%E5%85%84%20%E3%81%82%E3%81%AB">あに</a></span></div>
    <div class="on readings"><span class="type">On:</span> <span class="japanese_gothic"><a href="//jisho.org/search/%E5%85%84%20%E3%81%91%E3%81%84">ケイ</a>、 <a href="//jisho.org/search/%E5%85%84%20%E3%81%8D%E3%82%87%E3%81%86">キョウ</a></span></div>
   </div>
  </div>
  <div class="entry kanji_light clearfix">
   <div class="kanji_light_content">
    <div class="literal_block"><span class="character literal japanese_gothic"><a href="//jisho.org/search/%E5%BC%9F%20%23kanji">弟</a></span></div>
    <div class="meanings english sense"><span>younger brother</span></div>
    <div class="kun readings"><span class="type"><a href="/docs/kun">Kun:</a></span> <span class="japanese_gothic"><a href="//jisho.org/search/%E5%BC%9F%20%E3%81%8A%E3%81%A8%E3%81%86%E3%81%A8">おとうと</a></span></div>
    <div class="on readings"><span class="type">On:</span> <span class="japanese_gothic"><a href="//jisho.org/search/%E5%BC%9F%20%E3%81%A6%E3%81%84">テイ</a></span></div>
   </div>
  </div>
 </div>
</div>
</div>
</body></html>"#;

pub const JISHO_PERAPERA: &str = r#"<html><body>
<div id="main_results">
 <div class="concept_light clearfix">
  <div class="concept_light-wrapper">
   <div class="concept_light-readings">
    <div class="concept_light-representation">
     <span class="furigana"><span></span><span></span><span></span><span></span></span>
     <span class="text">ペラペラ</span>
    </div>
   </div>
  </div>
  <div class="concept_light-meanings">
   <div class="meanings-wrapper">
    <div class="meaning-wrapper"><div class="meaning-definition"><span class="meaning-meaning">fluently (speaking)</span></div></div>
    <div class="meaning-tags">Adverb</div>
    <div class="meaning-wrapper"><div class="meaning-definition"><span class="meaning-meaning">incessantly (talking)</span></div></div>
   </div>
  </div>
 </div>
</div>
</body></html>"#;

/// Readings exposed as ruby tags instead of furigana spans
pub fn jisho_ruby(word: &str, base: &str, reading: &str) -> String {
    format!(
        r#"<html><body><div class="concept_light">
 <div class="concept_light-wrapper"><div class="concept_light-readings">
  <div class="concept_light-representation">
   <span class="furigana"><ruby class="furigana-justify"><rb>{base}</rb><rt>{reading}</rt></ruby></span>
   <span class="text">{word}</span>
  </div>
 </div></div>
</div></body></html>"#
    )
}

pub const JISHO_NO_MATCHES: &str = r#"<html><body>
<div id="main_results"><div id="no-matches">Sorry, couldn't find anything matching qwertyuiop.</div></div>
</body></html>"#;

pub const JISHO_CARD_WITHOUT_READINGS: &str = r#"<html><body>
<div class="concept_light"><div class="concept_light-meanings"></div></div>
</body></html>"#;

pub const JISHO_CARD_WITHOUT_WORD: &str = r#"<html><body>
<div class="concept_light"><div class="concept_light-wrapper">
 <div class="concept_light-readings"><div class="concept_light-representation"><span class="text"> </span></div></div>
</div></div>
</body></html>"#;

/// KanjiDamage page for `glyph`, with its radicals region in the current layout
pub fn kanjidmg_page(glyph: &str, gloss: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<div class="navbar"><div class="container"><a href="/">KanjiDamage</a></div></div>
<div class="container">
 <div class="row"><div class="col-md-12"><a href="/kanji/11-prev">&lt; prev</a></div></div>
 <div class="row">
  <div class="col-md-8">
   <h1><span class="kanji_character">{glyph}</span> <span class="translation">{gloss}</span></h1>
   <a href="/kanji/5-mouth-口"><span class="kanji_character">口</span></a> mouth
   +
   <a href="/kanji/30-legs-儿"><span class="kanji_character">儿</span></a> (legs)
   =
  </div>
  <div class="col-md-4">Jōyō kanji</div>
 </div>
 <div class="row">
  <div class="col-md-12">
   <h2>Onyomi</h2>
   <p>KYOU, KEI</p>
   <h2>Mnemonic</h2>
   <div class="description">"The {gloss} is all mouth and legs."</div>
  </div>
 </div>
</div>
</body></html>"#
    )
}

pub const KANJIDMG_IMAGE_GLYPH: &str = r#"<html><body>
<div class="container">
 <div class="row"><div class="col-md-12"></div></div>
 <div class="row">
  <div class="col-md-8">
   <h1><span class="kanji_character"><img src="/assets/kanji/rare.png" alt=""></span> <span class="translation">rare thing</span></h1>
   <a href="/radicals/9-spike"><img src="assets/radicals/spike.png"></a> spike
  </div>
 </div>
</div>
</body></html>"#;

pub const KANJIDMG_LEGACY: &str = r#"<html><body>
<div class="container">
 <div class="row"></div>
 <div class="row">
  <div class="span8">
   <h1><span class="kanji_character">何</span> <span class="translation">what</span></h1>
   <a href="/kanji/2-person">亻</a> person +
   <a href="/kanji/40-can">可</a> can
  </div>
 </div>
</div>
</body></html>"#;

pub const KANJIDMG_NO_GLYPH: &str = r#"<html><body>
<div class="container">
 <div class="row"></div>
 <div class="row"><div class="col-md-8"><h1><span class="kanji_character"> </span><span class="translation">nothing</span></h1></div></div>
</div>
</body></html>"#;

pub const KANJIDMG_NO_HEADER: &str = r#"<html><body>
<div class="container"><div class="row">only one row</div></div>
</body></html>"#;

pub const KANJIDMG_LISTING: &str = r#"<html><body>
<div class="container">
 <div class="row">
  <table class="table">
   <tr><th>#</th><th></th><th>Kanji</th><th>Meaning</th></tr>
   <tr><td>1</td><td><img src="/x.png"></td><td><a href="/kanji/1-one-一">一</a></td><td>one</td></tr>
   <tr><td>12</td><td></td><td><a href="/kanji/12-older-brother-兄"> 兄 </a></td><td>older brother</td></tr>
   <tr><td>13</td><td></td><td>弟</td><td>younger brother</td></tr>
   <tr><td>14</td><td></td><td><a>亡</a></td><td>deceased</td></tr>
   <tr><td>15</td><td></td><td><a href="/kanji/15-empty"></a></td><td>nothing</td></tr>
  </table>
 </div>
</div>
</body></html>"#;

/// Two tag blocks in a row, and a summary card missing its glyph link
pub const JISHO_STACKED_TAGS: &str = r#"<html><body>
<div class="concept_light">
 <div class="concept_light-wrapper"><div class="concept_light-readings">
  <div class="concept_light-representation">
   <span class="furigana"><span class="kanji">なに</span></span>
   <span class="text">何</span>
  </div>
 </div></div>
 <div class="concept_light-meanings">
  <div class="meanings-wrapper">
   <div class="meaning-tags">Pronoun</div>
   <div class="meaning-tags">Wikipedia definition</div>
   <div class="meaning-wrapper"><div class="meaning-definition"><span class="meaning-meaning">what</span></div></div>
   <div class="meaning-wrapper"><div class="meaning-definition"><span class="meaning-meaning">how many</span></div></div>
  </div>
 </div>
</div>
<div id="secondary">
 <div class="kanji_light_block">
  <div class="kanji_light_content">
   <div class="literal_block"><span class="character"></span></div>
   <div class="meanings">broken card</div>
  </div>
  <div class="kanji_light_content">
   <div class="literal_block"><span class="character"><a href="//jisho.org/search/%E4%BD%95%20%23kanji">何</a></span></div>
   <div class="meanings">what</div>
  </div>
 </div>
</div>
</body></html>"#;
