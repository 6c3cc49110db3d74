//! Tests for reward code generation.

use noughts::generate_code;

#[test]
fn test_code_has_five_characters() {
    assert_eq!(generate_code().len(), 5);
}

#[test]
fn test_code_uses_only_the_allowed_alphabet() {
    for _ in 0..100 {
        let code = generate_code();
        assert!(
            code.chars()
                .all(|c| "ABCDEFGHJKLMNPQRSTUVWXYZ23456789".contains(c)),
            "unexpected character in {code}"
        );
    }
}

#[test]
fn test_code_avoids_confusable_characters() {
    for _ in 0..100 {
        let code = generate_code();
        for confusable in ['0', 'O', 'I', '1'] {
            assert!(!code.contains(confusable), "{code} contains {confusable}");
        }
    }
}

#[test]
fn test_codes_spread_across_the_space() {
    let codes: std::collections::HashSet<String> = (0..100).map(|_| generate_code()).collect();
    // 32^5 possibilities make collisions across 100 draws vanishingly rare.
    assert!(codes.len() > 50);
}
