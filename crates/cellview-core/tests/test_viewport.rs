use std::thread;

use cellview_core::viewport::{AxisRange, FactorRange, Span, ViewportRange};

#[test]
fn test_clone_shares_span() {
    let a = ViewportRange::unit();
    let b = a.clone();
    assert!(a.ptr_eq(&b));

    b.set_range(0.2, 0.4);
    assert_eq!(a.get(), Span::new(0.2, 0.4));
}

#[test]
fn test_detached_copy_is_independent() {
    let a = ViewportRange::new(0.0, 2.0);
    let c = a.detached();
    assert!(!a.ptr_eq(&c));
    assert_eq!(c.get(), a.get());

    c.set_range(5.0, 6.0);
    assert_eq!(a.get(), Span::new(0.0, 2.0));
}

#[test]
fn test_pan_and_zoom() {
    let r = ViewportRange::unit();
    r.pan(0.5);
    assert_eq!(r.get(), Span::new(0.5, 1.5));

    r.zoom(1.0, 0.5);
    assert_eq!(r.get(), Span::new(0.75, 1.25));
    assert_eq!(r.get().length(), 0.5);
}

#[test]
fn test_shared_range_visible_across_threads() {
    let a = ViewportRange::unit();
    let b = a.clone();
    thread::spawn(move || b.set_range(-1.0, 1.0))
        .join()
        .unwrap();
    assert_eq!(a.start(), -1.0);
    assert_eq!(a.end(), 1.0);
}

#[test]
fn test_concurrent_pans_are_not_lost() {
    let range = ViewportRange::unit();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let r = range.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    r.pan(1.0);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(range.get(), Span::new(8000.0, 8001.0));
}

#[test]
fn test_axis_range_sharing() {
    let r = ViewportRange::unit();
    let a = AxisRange::Linear(r.clone());
    let b = AxisRange::Linear(r);
    let c = AxisRange::Linear(ViewportRange::unit());
    let f = AxisRange::Factor(FactorRange::new(vec!["a".into()]));

    assert!(a.is_shared_with(&b));
    assert!(!a.is_shared_with(&c));
    assert!(!a.is_shared_with(&f));
    assert!(f.as_linear().is_none());
    assert_eq!(f.as_factor().map(FactorRange::len), Some(1));
}

#[test]
fn test_factor_range_index() {
    let f = FactorRange::new(vec!["3".into(), "12".into()]);
    assert_eq!(f.index_of("12"), Some(1));
    assert_eq!(f.index_of("7"), None);
    assert!(!f.is_empty());
}
