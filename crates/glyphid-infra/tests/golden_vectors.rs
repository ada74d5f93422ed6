//! Locked identicon outputs for known names.
//!
//! These values are part of the visual identity of existing workspaces. A
//! failure here means every stored identicon changed.

use std::collections::HashSet;

use glyphid_infra::derive;
use glyphid_types::color::Rgb;
use glyphid_types::error::IdenticonError;
use glyphid_types::grid::GridSize;
use glyphid_types::identicon::Identicon;

fn render(identicon: &Identicon) -> Vec<String> {
    identicon
        .grid
        .rows()
        .map(|row| row.iter().map(|on| if *on { '#' } else { '.' }).collect())
        .collect()
}

#[test]
fn main_5x5() {
    let identicon = derive("main", 5).unwrap();
    assert_eq!(identicon.color, Rgb::new(125, 202, 61));
    assert_eq!(
        render(&identicon),
        vec!["##.##", "..#..", "#####", "##.##", ".###."]
    );
}

#[test]
fn main_3x3() {
    let identicon = derive("main", 3).unwrap();
    assert_eq!(identicon.color, Rgb::new(125, 202, 61));
    assert_eq!(render(&identicon), vec!["###", "...", ".#."]);
}

#[test]
fn main_1x1() {
    let identicon = derive("main", 1).unwrap();
    assert_eq!(render(&identicon), vec!["#"]);
}

#[test]
fn empty_name_5x5() {
    let identicon = derive("", 5).unwrap();
    assert_eq!(identicon.color, Rgb::new(156, 31, 205));
    assert_eq!(
        render(&identicon),
        vec![".....", "##.##", ".#.#.", ".###.", "#####"]
    );
    assert_eq!(identicon, derive("", 5).unwrap());
}

#[test]
fn untitled_7x7_uses_extended_window() {
    let identicon = derive("untitled", 7).unwrap();
    assert_eq!(identicon.color, Rgb::new(194, 77, 215));
    assert_eq!(
        render(&identicon),
        vec![
            ".#####.", "#.###.#", "#.#.#.#", "..#.#..", ".##.##.", ".##.##.", ".#...#.",
        ]
    );
}

#[test]
fn workspace_1_3x3() {
    let identicon = derive("workspace-1", 3).unwrap();
    assert_eq!(identicon.color, Rgb::new(206, 65, 103));
    assert_eq!(render(&identicon), vec!["#.#", "#.#", "###"]);
}

#[test]
fn similar_names_are_distinct() {
    let names = ["project-alpha", "project-beta", "project-gamma", "project-delta"];
    let identicons: Vec<Identicon> = names.iter().map(|n| derive(n, 5).unwrap()).collect();

    let expected_colors = [
        Rgb::new(100, 62, 197),
        Rgb::new(36, 216, 135),
        Rgb::new(114, 50, 170),
        Rgb::new(91, 213, 201),
    ];
    for (identicon, expected) in identicons.iter().zip(expected_colors) {
        assert_eq!(identicon.color, expected, "{}", identicon.name);
    }

    let colors: HashSet<Rgb> = identicons.iter().map(|i| i.color).collect();
    assert_eq!(colors.len(), 4);

    let grids: HashSet<Vec<Vec<bool>>> = identicons.iter().map(|i| i.grid.to_rows()).collect();
    assert!(grids.len() >= 3);
}

#[test]
fn every_output_is_symmetric() {
    for name in ["", "main", "feature/auth", "bugfix/crash", "ワークスペース"] {
        for size in (1..=GridSize::MAX).step_by(2) {
            let identicon = derive(name, size).unwrap();
            assert!(identicon.grid.is_mirror_symmetric(), "{name:?} at {size}");
            assert_eq!(identicon, derive(name, size).unwrap());
        }
    }
}

#[test]
fn invalid_grid_sizes_are_rejected() {
    assert_eq!(derive("x", 4), Err(IdenticonError::InvalidGridSize(4)));
    assert_eq!(derive("x", 0), Err(IdenticonError::InvalidGridSize(0)));
    assert_eq!(
        derive("x", 21),
        Err(IdenticonError::GridSizeTooLarge { size: 21, max: 19 })
    );
}
