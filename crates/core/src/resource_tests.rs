use super::*;

#[test]
fn add_sums_components() {
    let a = Resource::new(1024, 1);
    let b = Resource::new(512, 2);
    assert_eq!(a + b, Resource::new(1536, 3));
}

#[test]
fn saturating_sub_clamps_to_zero_per_component() {
    let a = Resource::new(512, 1);
    let b = Resource::new(1024, 4);
    assert_eq!(a.saturating_sub(&b), Resource::ZERO);
}

#[test]
fn saturating_sub_does_not_clamp_when_not_needed() {
    let a = Resource::new(2048, 4);
    let b = Resource::new(1024, 1);
    assert_eq!(a.saturating_sub(&b), Resource::new(1024, 3));
}

#[test]
fn le_is_component_wise() {
    let small = Resource::new(512, 1);
    let big = Resource::new(1024, 2);
    assert!(small.le(&big));
    assert!(!big.le(&small));
    assert!(small.le(&small));
}

#[test]
fn le_requires_both_components() {
    // More memory but fewer vcores is not <=.
    let a = Resource::new(2048, 1);
    let b = Resource::new(1024, 4);
    assert!(!a.le(&b));
    assert!(!b.le(&a));
}

#[test]
fn scaled_multiplies_both_components() {
    let unit = Resource::new(1024, 1);
    assert_eq!(unit.scaled(2), Resource::new(2048, 2));
}

#[test]
fn is_zero_true_only_for_zero() {
    assert!(Resource::ZERO.is_zero());
    assert!(!Resource::new(1, 0).is_zero());
    assert!(!Resource::new(0, 1).is_zero());
}

#[test]
fn display_format() {
    assert_eq!(Resource::new(1024, 2).to_string(), "<memory:1024, vCores:2>");
}
