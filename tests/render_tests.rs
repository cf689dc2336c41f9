use naval_setup::{board_to_string, render_board, Board, Grid, Orientation, Placement};

#[test]
fn test_display_small_grid() {
    let mut grid = Grid::<3>::new();
    grid.place(&Placement::new("h", 1, 0, Orientation::Horizontal))
        .unwrap();
    assert_eq!(grid.to_string(), "   0 1 2 \n0  0 0 0 \n1  3 3 3 \n2  0 0 0 \n");
}

#[test]
fn test_two_disjoint_ships_render() {
    let mut board = Board::new();
    board
        .place(&Placement::new("Vertical", 2, 3, Orientation::Vertical))
        .unwrap();
    board
        .place(&Placement::new("Horizontal", 5, 5, Orientation::Horizontal))
        .unwrap();

    let expected = "\n\
=== BATTLESHIP BOARD ===\n\
\x20  0 1 2 3 4 5 6 7 8 9 \n\
0  0 0 0 0 0 0 0 0 0 0 \n\
1  0 0 0 0 0 0 0 0 0 0 \n\
2  0 0 0 3 0 0 0 0 0 0 \n\
3  0 0 0 3 0 0 0 0 0 0 \n\
4  0 0 0 3 0 0 0 0 0 0 \n\
5  0 0 0 0 0 3 3 3 0 0 \n\
6  0 0 0 0 0 0 0 0 0 0 \n\
7  0 0 0 0 0 0 0 0 0 0 \n\
8  0 0 0 0 0 0 0 0 0 0 \n\
9  0 0 0 0 0 0 0 0 0 0 \n\
========================\n\
Legend: 0 = Water, 3 = Ship\n";
    assert_eq!(board_to_string(&board), expected);
}

#[test]
fn test_render_board_writes_to_any_writer() {
    let board = Board::new();
    let mut out = Vec::new();
    render_board(&mut out, &board).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1 + 1 + 1 + 10 + 2);
    assert!(text.ends_with("Legend: 0 = Water, 3 = Ship\n"));
}

#[test]
fn test_wide_grid_columns_stay_aligned() {
    let mut grid = Grid::<12>::new();
    grid.place(&Placement::new("h", 11, 9, Orientation::Horizontal))
        .unwrap();
    let text = grid.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "    0  1  2  3  4  5  6  7  8  9  10 11 ");
    assert_eq!(lines[1], "0   0  0  0  0  0  0  0  0  0  0  0  0  ");
    assert_eq!(lines[12], "11  0  0  0  0  0  0  0  0  0  3  3  3  ");
    assert!(lines.iter().all(|l| l.len() == lines[0].len()));
}
