use lazy_static::lazy_static;
use regex::Regex;

use crate::error::NotifyError;
use crate::models::draft_pack::DraftNotify;
use crate::opt::*;

lazy_static! {
    static ref DRAFT_NOTIFY_RE: Regex =
        Regex::new(r"^.*\(Draft\.Notify\): (?P<draft_notify>\{.*\})$").unwrap();
}

/// Pulls the JSON payload out of a `Draft.Notify` log line.
pub fn extract_payload(line: &str) -> Option<&str> {
    DRAFT_NOTIFY_RE
        .captures(line)
        .and_then(|caps| caps.name("draft_notify"))
        .map(|m| m.as_str())
}

/// Returns `None` for lines that are not draft notifications.
pub fn decode(line: &str) -> Option<Result<DraftNotify, NotifyError>> {
    let payload = extract_payload(line)?;
    log_if(payload, DbgFlg::Notify);

    let notify = DraftNotify::from_json(payload);
    if let Ok(notify) = &notify {
        notify.dbg_if(DbgFlg::Notify);
    }
    Some(notify)
}

#[cfg(test)]
mod test {
    use super::*;

    const LINE: &str = r#"[UnityCrossThreadLogger]==> 2024-02-06 (Draft.Notify): {"draft_id":"d1","event_name":"e","pack_number":1,"pick_number":3,"method":"pack","card_ids":[1]}"#;

    #[test]
    fn test_extract_payload() {
        assert_eq!(
            extract_payload(LINE),
            Some(r#"{"draft_id":"d1","event_name":"e","pack_number":1,"pick_number":3,"method":"pack","card_ids":[1]}"#)
        );
    }

    #[test]
    fn test_decode() {
        let notify = decode(LINE).unwrap().unwrap();
        assert_eq!(notify.draft_id, "d1");
        assert_eq!(notify.card_ids, vec![1]);
    }

    #[test]
    fn test_ignores_noise() {
        assert!(decode("").is_none());
        assert!(decode("[UnityCrossThreadLogger] Draft.Notify {}").is_none());
        assert!(decode("(Draft.Notify): not json").is_none());
        assert!(decode(r#"(Draft.Notify): {"draft_id":"d1"} trailing"#).is_none());
        assert!(decode(r#"(Draft.MakePick): {"draft_id":"d1"}"#).is_none());
    }

    #[test]
    fn test_malformed_payload() {
        let line = r#"x (Draft.Notify): {"draft_id":"d1","event_name":"e","pack_number":1,"pick_number":3,"method":"pack"}"#;
        assert!(matches!(
            decode(line),
            Some(Err(NotifyError::MalformedPayload(_)))
        ));
    }
}
