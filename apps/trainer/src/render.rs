//! Text fragments for the console front end.

use crate::commands::StatusSummary;
use quest_core::{GrammarTip, ImportReport, Sentence, Word};

pub const MENU: &str = "\
commands:
  q  quick (1 word)        e  easy (2 words + sentence)
  g  grammar tip           d  mark today done
  x  +1 XP                 a  add words (term = translation)
  l  load default set      s  toggle strict mode
  r  reset all data        ?  status
  h  help                  exit";

pub fn status_line(status: &StatusSummary) -> String {
    format!(
        "streak {} | today {} | XP {} | words {} | strict mode {}",
        status.streak,
        if status.done_today { "done" } else { "not yet" },
        status.experience,
        status.word_count,
        if status.strict_mode { "on" } else { "off" },
    )
}

pub fn word_card(position: usize, total: usize, word: &Word) -> String {
    format!(
        "[word {}/{}]\n  {}\n  {}\n(y) got it   (n) not yet\nNot yet is fine. It just comes back sooner.",
        position + 1,
        total,
        word.term,
        word.translation,
    )
}

pub fn sentence_card(sentence: &Sentence) -> String {
    format!(
        "[short sentence]\n  {}\n  {}\n(press Enter when read)\nNo need to be perfect. Getting the gist counts.",
        sentence.text, sentence.translation,
    )
}

pub fn grammar_card(tip: &GrammarTip) -> String {
    let points: Vec<String> = tip.points.iter().map(|p| format!("  • {p}")).collect();
    format!(
        "[grammar bite] {}\n{}\n  ---\n  {}\n  {}",
        tip.title,
        points.join("\n"),
        tip.example,
        tip.translation,
    )
}

pub fn completion_notice() -> &'static str {
    "✅ Today's win. One step is enough."
}

pub fn import_notice(report: &ImportReport) -> String {
    if report.added == 0 {
        return "Nothing added (format: english = translation)".to_string();
    }
    let skipped = report.malformed + report.duplicates;
    if skipped == 0 {
        format!("📦 Added {} words", report.added)
    } else {
        format!("📦 Added {} words ({} skipped)", report.added, skipped)
    }
}

pub fn default_set_notice(added: usize) -> String {
    format!("⚙️ Engineering set +{added} words")
}

pub fn strict_mode_notice(enabled: bool) -> &'static str {
    if enabled {
        "Strict mode ON"
    } else {
        "Strict mode OFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn word_card_is_one_based() {
        let word = Word::new("sensor", "センサー", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let card = word_card(0, 2, &word);
        assert!(card.starts_with("[word 1/2]"));
        assert!(card.contains("センサー"));
    }

    #[test]
    fn import_notice_mentions_skips() {
        let report = ImportReport {
            added: 2,
            malformed: 1,
            duplicates: 1,
        };
        assert_eq!(import_notice(&report), "📦 Added 2 words (2 skipped)");
        assert!(import_notice(&ImportReport::default()).starts_with("Nothing added"));
    }

    #[test]
    fn status_line_shows_flags() {
        let status = StatusSummary {
            streak: 3,
            done_today: true,
            experience: 11,
            word_count: 20,
            strict_mode: false,
        };
        assert_eq!(
            status_line(&status),
            "streak 3 | today done | XP 11 | words 20 | strict mode off"
        );
    }

    #[test]
    fn grammar_card_lists_points() {
        let card = grammar_card(quest_core::grammar_tip(0));
        assert_eq!(card.matches('•').count(), 3);
    }
}
