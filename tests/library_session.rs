use tempfile::tempdir;
use toroidal_life::{
    new_board, place, step, toggle, AliveSet, LifeError, PatternLibrary, Session, SessionState,
    MANUAL_PATTERN,
};

#[test]
fn glider_saved_and_replayed() {
    let temp_dir = tempdir().unwrap();
    let library = PatternLibrary::new(temp_dir.path().join("gol.json"));
    let glider: Vec<(i64, i64)> = vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

    library.save("glider", &glider).unwrap();
    assert_eq!(library.load_all()["glider"], glider);
    assert_eq!(
        library.list_names(),
        vec![MANUAL_PATTERN.to_string(), "glider".to_string()]
    );

    let board = new_board(10, 10).unwrap();
    let placed = place(&board, &library.get("glider").unwrap()).unwrap();
    assert_eq!(placed.len(), 5);

    let mut current = placed.clone();
    for _ in 0..40 {
        current = step(&board, &current);
    }
    // 40 generations move a glider 10 cells diagonally, one full lap
    assert_eq!(current, placed);
}

#[test]
fn library_file_unreadable_is_empty() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("gol.json");
    std::fs::write(&path, "{\"glider\": \"oops\"}").unwrap();

    let library = PatternLibrary::new(&path);
    assert!(library.load_all().is_empty());
    assert_eq!(library.list_names(), vec![MANUAL_PATTERN.to_string()]);

    library.save("dot", &[(3, 3)]).unwrap();
    assert_eq!(library.load_all().len(), 1);
}

#[test]
fn oversized_placement_leaves_caller_state() {
    let board = new_board(3, 3).unwrap();
    let held: AliveSet = [(1, 1)].into_iter().collect();

    let result = place(&board, &[(0, 0), (0, 3)]);
    assert!(matches!(result, Err(LifeError::Size { .. })));
    assert_eq!(held, [(1, 1)].into_iter().collect::<AliveSet>());

    let edited = toggle(&board, &held, (0, 0));
    assert_eq!(edited.len(), 2);
    assert_eq!(held.len(), 1);
}

#[test]
fn invalid_board_rejected() {
    assert!(matches!(
        new_board(0, 4),
        Err(LifeError::Configuration { .. })
    ));
}

#[test]
fn session_lifecycle() {
    let temp_dir = tempdir().unwrap();
    let library = PatternLibrary::new(temp_dir.path().join("gol.json"));
    library.save("blinker", &[(0, 0), (0, 1), (0, 2)]).unwrap();

    let mut session = Session::new(new_board(5, 5).unwrap());
    session.select_pattern(&library, "blinker").unwrap();
    let start = session.alive().clone();

    session.run();
    session.tick();
    session.tick();
    assert_eq!(session.alive(), &start);
    assert_eq!(session.generation(), 2);

    session.pause();
    session.toggle((0, 0));
    session.save_initial(&library, "blinker-plus").unwrap();
    assert_eq!(library.get("blinker-plus").unwrap().len(), 4);

    session.run();
    session.tick();
    session.stop();
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.alive(), session.initial());
    assert!(session.alive().contains(&(0, 0)));
}
