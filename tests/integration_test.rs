//! Integration tests for the text-queue crate

use text_queue::{QueueEngine, QueueError, QueueOperation, QueueResponse, TextQueue};

fn insert_tail(value: &str) -> QueueOperation {
    QueueOperation::InsertTail {
        value: Some(value.to_owned()),
    }
}

fn insert_head(value: &str) -> QueueOperation {
    QueueOperation::InsertHead {
        value: Some(value.to_owned()),
    }
}

#[test]
fn test_build_sort_reverse_remove_scenario() {
    // create -> insert_tail("b") -> insert_tail("a") -> insert_head("c")
    let mut q = TextQueue::new();
    q.insert_tail("b");
    q.insert_tail("a");
    q.insert_head("c");
    assert_eq!(q.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!(q.len(), 3);

    q.sort();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "b", "c"]);

    q.reverse();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["c", "b", "a"]);

    // remove into a 2-byte buffer: 1 payload byte plus the terminator
    let mut buf = [0xffu8; 2];
    assert!(q.remove_head(&mut buf));
    assert_eq!(&buf, b"c\0");
    assert_eq!(q.len(), 2);
    assert_eq!(q.front(), Some("b"));
}

#[test]
fn test_basic_engine_operations() {
    let mut engine = QueueEngine::new();

    let result = engine.apply(insert_tail("first"));
    assert!(matches!(result, Ok(QueueResponse::Inserted)));

    let result = engine.apply(insert_tail("second"));
    assert!(matches!(result, Ok(QueueResponse::Inserted)));

    let result = engine.apply(QueueOperation::Size);
    assert!(matches!(result, Ok(QueueResponse::Size(2))));

    // FIFO order out
    let result = engine.apply(QueueOperation::TakeHead);
    assert!(matches!(
        result,
        Ok(QueueResponse::Taken(Some(s))) if s == "first"
    ));

    let result = engine.apply(QueueOperation::TakeHead);
    assert!(matches!(
        result,
        Ok(QueueResponse::Taken(Some(s))) if s == "second"
    ));

    // Queue should be empty now
    let result = engine.apply(QueueOperation::TakeHead);
    assert!(matches!(result, Ok(QueueResponse::Taken(None))));
}

#[test]
fn test_engine_remove_head_truncates() {
    let mut engine = QueueEngine::new();
    engine.apply(insert_head("elephant")).unwrap();

    let result = engine.apply(QueueOperation::RemoveHead { capacity: 4 });
    assert!(matches!(
        result,
        Ok(QueueResponse::Removed(s)) if s == "ele"
    ));
    assert!(matches!(
        engine.apply(QueueOperation::Size),
        Ok(QueueResponse::Size(0))
    ));
}

#[test]
fn test_engine_error_taxonomy() {
    let mut engine = QueueEngine::new();

    // invalid argument: absent value
    let result = engine.apply(QueueOperation::InsertHead { value: None });
    assert_eq!(result, Err(QueueError::MissingValue));

    // empty-queue removal
    let result = engine.apply(QueueOperation::RemoveHead { capacity: 8 });
    assert_eq!(result, Err(QueueError::Empty));

    // failed operations leave the queue unchanged
    assert!(matches!(
        engine.apply(QueueOperation::Size),
        Ok(QueueResponse::Size(0))
    ));
}

#[test]
fn test_size_accounting_over_mixed_sequences() {
    let mut engine = QueueEngine::new();
    let mut inserted = 0i64;
    let mut removed = 0i64;

    for i in 0..200 {
        match fastrand::u8(..4) {
            0 => {
                engine.apply(insert_head(&format!("h{i}"))).unwrap();
                inserted += 1;
            }
            1 => {
                engine.apply(insert_tail(&format!("t{i}"))).unwrap();
                inserted += 1;
            }
            2 => {
                if let Ok(QueueResponse::Taken(Some(_))) =
                    engine.apply(QueueOperation::TakeHead)
                {
                    removed += 1;
                }
            }
            _ => {
                if engine.apply(QueueOperation::RemoveHead { capacity: 8 }).is_ok() {
                    removed += 1;
                }
            }
        }
        let size = match engine.apply(QueueOperation::Size) {
            Ok(QueueResponse::Size(n)) => n as i64,
            other => panic!("unexpected response: {other:?}"),
        };
        assert_eq!(size, inserted - removed);
        assert!(size >= 0);
    }
}

#[test]
fn test_sort_and_reverse_through_engine() {
    let mut engine = QueueEngine::new();
    for value in ["delta", "alpha", "charlie", "bravo"] {
        engine.apply(insert_tail(value)).unwrap();
    }

    assert!(matches!(
        engine.apply(QueueOperation::Sort),
        Ok(QueueResponse::Sorted)
    ));
    let sorted: Vec<_> = engine.queue().iter().collect();
    assert_eq!(sorted, ["alpha", "bravo", "charlie", "delta"]);

    assert!(matches!(
        engine.apply(QueueOperation::Reverse),
        Ok(QueueResponse::Reversed)
    ));
    let reversed: Vec<_> = engine.queue().iter().collect();
    assert_eq!(reversed, ["delta", "charlie", "bravo", "alpha"]);
}

#[test]
fn test_sort_keeps_duplicate_payloads() {
    let mut q = TextQueue::new();
    q.insert_tail("key");
    q.insert_tail("abc");
    q.insert_tail("key");
    q.insert_tail("key");
    q.sort();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["abc", "key", "key", "key"]);
    assert_eq!(q.len(), 4);
}

#[test]
fn test_operations_serialize_for_transport() {
    let op = QueueOperation::InsertTail {
        value: Some("payload".to_owned()),
    };
    let encoded = serde_json::to_string(&op).unwrap();
    let decoded: QueueOperation = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, op);

    let response = QueueResponse::Removed("payload".to_owned());
    let encoded = serde_json::to_string(&response).unwrap();
    let decoded: QueueResponse = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, response);
}
