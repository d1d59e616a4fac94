use std::thread;

use num_bigint::BigInt;
use sql_binders::prelude::*;
use sql_binders::test_utils::{BoundCall, RecordingStatement};

#[test]
fn binders_are_shared_across_threads() {
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                scope.spawn(move || {
                    let binder = binders::integer_binder();
                    let mut stmt = RecordingStatement::new();
                    for position in 1..=100 {
                        let text = (worker * 1_000 + position).to_string();
                        binder
                            .bind(&mut stmt, position, &BindValue::from(text))
                            .unwrap();
                    }
                    assert_eq!(stmt.calls().len(), 100);
                    assert_eq!(
                        stmt.call_at(100),
                        Some(&BoundCall::GenericTyped(
                            BindValue::BigInt(BigInt::from(worker * 1_000 + 100)),
                            SqlType::BigInt
                        ))
                    );
                    std::ptr::from_ref(binder) as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn every_kind_has_one_stable_binder() {
    for kind in BinderKind::ALL {
        let first = kind.binder();
        let second = kind.binder();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name(), second.name());
        assert_eq!(first.kind(), kind);
        assert_eq!(kind.to_string().parse::<BinderKind>().unwrap(), kind);
    }
    assert!(std::ptr::eq(binders::default_binder(), BinderKind::Default.binder()));
    assert!(std::ptr::eq(binders::string_binder(), BinderKind::String.binder()));
    assert!(std::ptr::eq(binders::timestamp_binder(), BinderKind::Timestamp.binder()));
    assert!(std::ptr::eq(binders::time_binder(), BinderKind::Time.binder()));
    assert!(std::ptr::eq(binders::decimal_binder(), BinderKind::Decimal.binder()));
    assert!(std::ptr::eq(binders::integer_binder(), BinderKind::Integer.binder()));
}

#[test]
fn null_never_reaches_generic_binding() {
    let mut stmt = RecordingStatement::new();
    for (index, kind) in BinderKind::ALL.into_iter().enumerate() {
        kind.binder()
            .bind(&mut stmt, index + 1, &BindValue::Null)
            .unwrap();
    }
    assert_eq!(stmt.calls().len(), BinderKind::ALL.len());
    assert!(stmt.calls().iter().all(|(_, call)| *call == BoundCall::Null));
}
