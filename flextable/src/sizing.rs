//! Column sizing: declared width to flex directive, and directive to cells.

use crate::types::{Size, WidthKind};

/// Layout instruction derived from a column's width declaration.
///
/// A column is either pinned to a basis and never grows or shrinks, or it
/// grows by a factor into whatever space the fixed columns leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizingDirective {
    Fixed { basis: u16 },
    Proportional { grow: u16 },
}

impl SizingDirective {
    pub fn basis(&self) -> Option<u16> {
        match self {
            SizingDirective::Fixed { basis } => Some(*basis),
            SizingDirective::Proportional { .. } => None,
        }
    }

    pub fn grow(&self) -> Option<u16> {
        match self {
            SizingDirective::Fixed { .. } => None,
            SizingDirective::Proportional { grow } => Some(*grow),
        }
    }

    /// Main-axis size for the cell element.
    pub fn size(&self) -> Size {
        match self {
            SizingDirective::Fixed { basis } => Size::Fixed(*basis),
            SizingDirective::Proportional { grow } => Size::Flex(*grow),
        }
    }

    pub fn flex_grow(&self) -> u16 {
        self.grow().unwrap_or(0)
    }

    pub fn flex_shrink(&self) -> u16 {
        match self {
            SizingDirective::Fixed { .. } => 0,
            SizingDirective::Proportional { .. } => 1,
        }
    }

    /// Recover a directive from an element size. `Auto` and `Fill` carry none.
    pub fn from_size(size: Size) -> Option<Self> {
        match size {
            Size::Fixed(basis) => Some(SizingDirective::Fixed { basis }),
            Size::Flex(grow) => Some(SizingDirective::Proportional { grow }),
            Size::Auto | Size::Fill => None,
        }
    }
}

impl From<SizingDirective> for Size {
    fn from(directive: SizingDirective) -> Self {
        directive.size()
    }
}

/// Turn a declared width into a sizing directive.
pub fn resolve_sizing(width: u16, kind: WidthKind) -> SizingDirective {
    match kind {
        WidthKind::Pixels => SizingDirective::Fixed { basis: width },
        WidthKind::FlexRatio => SizingDirective::Proportional { grow: width },
    }
}

/// Allocate concrete widths for a row of columns within `available` cells.
///
/// Fixed columns always receive their basis, even when that overflows.
/// The rest is split among proportional columns by grow factor; cells lost
/// to integer division go one each to the leftmost growing columns.
pub fn distribute(directives: &[SizingDirective], available: u16) -> Vec<u16> {
    let fixed_total: u32 = directives
        .iter()
        .filter_map(SizingDirective::basis)
        .map(u32::from)
        .sum();
    let total_grow: u32 = directives
        .iter()
        .filter_map(SizingDirective::grow)
        .map(u32::from)
        .sum();
    let remaining = u32::from(available).saturating_sub(fixed_total);

    let mut widths: Vec<u16> = directives
        .iter()
        .map(|directive| match directive {
            SizingDirective::Fixed { basis } => *basis,
            SizingDirective::Proportional { grow } if total_grow > 0 => {
                (remaining * u32::from(*grow) / total_grow) as u16
            }
            SizingDirective::Proportional { .. } => 0,
        })
        .collect();

    if total_grow == 0 {
        return widths;
    }

    let allocated: u32 = directives
        .iter()
        .zip(&widths)
        .filter(|(directive, _)| directive.grow().is_some())
        .map(|(_, width)| u32::from(*width))
        .sum();
    let mut leftover = remaining.saturating_sub(allocated);

    for (directive, width) in directives.iter().zip(widths.iter_mut()) {
        if leftover == 0 {
            break;
        }
        if directive.grow().is_some_and(|grow| grow > 0) {
            *width += 1;
            leftover -= 1;
        }
    }

    widths
}
