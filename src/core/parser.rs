//! Tagged payload parser
//!
//! A payload such as `d gas -c visa -a 42.50 -m "fuel"` is split on the
//! literal sequence `" -"`. Each trimmed token is classified by its first
//! character:
//!
//! | tag | field  |
//! |-----|--------|
//! | `d` | debit  |
//! | `c` | credit |
//! | `a` | amount |
//! | `m` | memo   |
//!
//! Tokens may come in any order. A repeated tag overwrites the earlier value
//! and tokens with any other first character are ignored. Double quotes are
//! stripped from the memo. The tag is only ever the first character of the
//! token, so `m dinner` is a memo even though the value starts with `d`.

use crate::core::traits::PayloadParser;
use crate::types::{DateStamp, Field, LedgerError, TransactionRecord};

const TOKEN_DELIMITER: &str = " -";

/// Parser for the single-letter tag grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct TagParser;

impl PayloadParser for TagParser {
    fn parse(&self, date: DateStamp, payload: &str) -> Result<TransactionRecord, LedgerError> {
        let mut debit = None;
        let mut credit = None;
        let mut amount = None;
        let mut memo = None;

        for token in payload.split(TOKEN_DELIMITER) {
            let token = token.trim();
            let mut chars = token.chars();
            let Some(tag) = chars.next() else {
                continue;
            };
            let value = tag_value(chars.as_str());

            match tag {
                'd' => debit = Some(value.to_string()),
                'c' => credit = Some(value.to_string()),
                'a' => amount = Some(value.to_string()),
                'm' => memo = Some(value.replace('"', "").trim().to_string()),
                _ => log::debug!("Ignoring unrecognized payload token '{}'", token),
            }
        }

        Ok(TransactionRecord {
            date,
            debit: debit.ok_or_else(|| LedgerError::missing_field(Field::Debit))?,
            credit: credit.ok_or_else(|| LedgerError::missing_field(Field::Credit))?,
            amount: amount.ok_or_else(|| LedgerError::missing_field(Field::Amount))?,
            memo: memo.unwrap_or_default(),
        })
    }
}

/// Value following a tag: drops the separating space and surrounding blanks
fn tag_value(rest: &str) -> &str {
    rest.strip_prefix(' ').unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date() -> DateStamp {
        DateStamp::new(2024, 3, 1)
    }

    fn parse(payload: &str) -> Result<TransactionRecord, LedgerError> {
        TagParser.parse(date(), payload)
    }

    #[test]
    fn test_parse_full_payload() {
        let record = parse(r#"d gas -c visa -a 42.50 -m "fuel""#).unwrap();
        assert_eq!(
            record,
            TransactionRecord {
                date: date(),
                debit: "gas".to_string(),
                credit: "visa".to_string(),
                amount: "42.50".to_string(),
                memo: "fuel".to_string(),
            }
        );
    }

    #[rstest]
    #[case::reordered(r#"a 10.00 -m "interest" -c chequing -d int"#)]
    #[case::extra_spaces(r#"  d int   -c chequing  -a 10.00   -m  "interest"  "#)]
    #[case::unquoted_memo("d int -c chequing -a 10.00 -m interest")]
    fn test_parse_is_order_and_spacing_insensitive(#[case] payload: &str) {
        let record = parse(payload).unwrap();
        assert_eq!(record.debit, "int");
        assert_eq!(record.credit, "chequing");
        assert_eq!(record.amount, "10.00");
        assert_eq!(record.memo, "interest");
    }

    #[rstest]
    #[case::missing_debit("c visa -a 5", Field::Debit)]
    #[case::missing_credit("d gas -a 5", Field::Credit)]
    #[case::missing_amount(r#"d gas -c visa -m "no amount""#, Field::Amount)]
    #[case::empty("", Field::Debit)]
    fn test_parse_missing_required_field(#[case] payload: &str, #[case] field: Field) {
        assert_eq!(parse(payload), Err(LedgerError::MissingField { field }));
    }

    #[test]
    fn test_memo_defaults_to_empty() {
        let record = parse("d gas -c visa -a 5").unwrap();
        assert_eq!(record.memo, "");
    }

    #[test]
    fn test_duplicate_tag_last_write_wins() {
        let record = parse("d gas -c visa -a 5 -d din").unwrap();
        assert_eq!(record.debit, "din");
    }

    #[test]
    fn test_unrecognized_tags_are_ignored() {
        let record = parse("d gas -x whatever -c visa -a 5").unwrap();
        assert_eq!(record.debit, "gas");
        assert_eq!(record.credit, "visa");
    }

    #[test]
    fn test_tag_anchored_to_first_character() {
        // values starting with tag letters stay in their own field
        let record = parse(r#"d din -c cash -a 12 -m "dinner with ann""#).unwrap();
        assert_eq!(record.debit, "din");
        assert_eq!(record.credit, "cash");
        assert_eq!(record.memo, "dinner with ann");
    }

    #[test]
    fn test_word_starting_with_tag_letter_is_classified_by_prefix() {
        // "-credit" is read as a credit tag with value "redit visa"
        let record = parse("d gas -credit visa -c visa -a 5").unwrap();
        assert_eq!(record.credit, "visa");
    }

    #[test]
    fn test_memo_keeps_inner_hyphens_without_leading_space() {
        let record = parse(r#"d gas -c visa -a 5 -m "road-trip fuel""#).unwrap();
        assert_eq!(record.memo, "road-trip fuel");
    }

    #[test]
    fn test_negative_amount_is_split_by_delimiter() {
        // "a -5" contains the delimiter, so the amount token is left empty
        let record = parse("d gas -c visa -a -5").unwrap();
        assert_eq!(record.amount, "");
    }

    #[rstest]
    #[case("gas", "visa", "42.50", "fuel")]
    #[case("int", "chequing", "10.00", "interest on savings")]
    #[case("visa", "chequing", "300", "card payment")]
    #[case("clo", "mastercard", "89.99", "")]
    fn test_payload_round_trip(
        #[case] debit: &str,
        #[case] credit: &str,
        #[case] amount: &str,
        #[case] memo: &str,
    ) {
        let payload = format!(r#"d {} -c {} -a {} -m "{}""#, debit, credit, amount, memo);
        let record = parse(&payload).unwrap();
        assert_eq!(record.debit, debit);
        assert_eq!(record.credit, credit);
        assert_eq!(record.amount, amount);
        assert_eq!(record.memo, memo);
    }
}
