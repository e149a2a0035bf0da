use flextable::{Size, SizingDirective, WidthKind, distribute, resolve_sizing};

// ============================================================================
// Resolver
// ============================================================================

#[test]
fn test_pixel_width_is_fixed_basis() {
    for width in [0, 1, 37, 100, u16::MAX] {
        let directive = resolve_sizing(width, WidthKind::Pixels);
        assert_eq!(directive, SizingDirective::Fixed { basis: width });
        assert_eq!(directive.basis(), Some(width));
        assert_eq!(directive.grow(), None, "fixed columns never grow");
        assert_eq!(directive.flex_shrink(), 0);
    }
}

#[test]
fn test_ratio_width_is_grow_factor() {
    for width in [0, 1, 3, 12] {
        let directive = resolve_sizing(width, WidthKind::FlexRatio);
        assert_eq!(directive, SizingDirective::Proportional { grow: width });
        assert_eq!(directive.grow(), Some(width));
        assert_eq!(directive.basis(), None, "proportional columns have no basis");
    }
}

#[test]
fn test_directive_to_size() {
    assert_eq!(resolve_sizing(20, WidthKind::Pixels).size(), Size::Fixed(20));
    assert_eq!(resolve_sizing(2, WidthKind::FlexRatio).size(), Size::Flex(2));
    assert_eq!(
        SizingDirective::from_size(Size::Flex(2)),
        Some(SizingDirective::Proportional { grow: 2 })
    );
    assert_eq!(SizingDirective::from_size(Size::Fill), None);
}

// ============================================================================
// Distribution
// ============================================================================

#[test]
fn test_distribute_fixed_then_flex() {
    let directives = [
        SizingDirective::Fixed { basis: 10 },
        SizingDirective::Proportional { grow: 1 },
        SizingDirective::Proportional { grow: 3 },
    ];
    assert_eq!(distribute(&directives, 50), vec![10, 10, 30]);
}

#[test]
fn test_distribute_leftover_goes_left() {
    let directives = [
        SizingDirective::Proportional { grow: 1 },
        SizingDirective::Proportional { grow: 1 },
        SizingDirective::Proportional { grow: 1 },
    ];
    let widths = distribute(&directives, 11);
    assert_eq!(widths, vec![4, 4, 3]);
    assert_eq!(widths.iter().sum::<u16>(), 11);
}

#[test]
fn test_distribute_fixed_overflow_keeps_basis() {
    let directives = [
        SizingDirective::Fixed { basis: 30 },
        SizingDirective::Proportional { grow: 1 },
    ];
    assert_eq!(distribute(&directives, 20), vec![30, 0]);
}

#[test]
fn test_distribute_zero_grow() {
    let directives = [
        SizingDirective::Fixed { basis: 5 },
        SizingDirective::Proportional { grow: 0 },
    ];
    assert_eq!(distribute(&directives, 20), vec![5, 0]);
}
