use knucklebones_engine::{
    COLUMN_CAPACITY, Column, DiceSeed, Face, FirstAvailablePolicy, Game, GameSetup, Grid,
    MoveError, Player, RandomPolicy, play_out, play_turn,
};

fn grid_with(column: usize, dice: &[Face]) -> Grid {
    let mut grid = Grid::EMPTY;
    for face in dice {
        grid.add_die(column, *face).unwrap();
    }
    grid
}

fn assert_grid_left_packed(grid: &Grid) {
    for column in grid.columns() {
        let slots = column.slots();
        let occupied = column.len();
        assert!(slots[..occupied].iter().all(Option::is_some));
        assert!(slots[occupied..].iter().all(Option::is_none));
        assert_eq!(slots.len(), COLUMN_CAPACITY);
    }
}

#[test]
fn opening_move_places_die_and_passes_turn() {
    let mut game = Game::from_setup(
        GameSetup::new(Player::First, Face::THREE),
        DiceSeed::from_u64(1),
    );

    game.player_move(0).unwrap();

    let column = game.grid(Player::First).column(0).unwrap();
    assert_eq!(column.slots(), &[Some(Face::THREE), None, None]);
    assert_eq!(game.turn(), Player::Second);
    assert!((1..=6).contains(&game.pending_die().value()));
    assert_eq!(game.grid(Player::Second), &Grid::EMPTY);
}

#[test]
fn placing_a_five_wipes_opponent_pair_of_fives() {
    let opponent = grid_with(2, &[Face::FIVE, Face::FIVE]);
    let setup = GameSetup::new(Player::First, Face::FIVE).with_grid(Player::Second, opponent);
    let mut game = Game::from_setup(setup, DiceSeed::from_u64(2));

    let outcome = game.player_move(2).unwrap();

    assert_eq!(outcome.removed, 2);
    assert_eq!(
        game.grid(Player::Second).column(2).unwrap(),
        &Column::EMPTY
    );
    assert_eq!(
        game.grid(Player::First).column(2).unwrap().slots(),
        &[Some(Face::FIVE), None, None]
    );
}

#[test]
fn negation_keeps_other_faces_in_order() {
    let opponent = grid_with(1, &[Face::SIX, Face::TWO, Face::FOUR]);
    let setup = GameSetup::new(Player::Second, Face::TWO).with_grid(Player::First, opponent);
    let mut game = Game::from_setup(setup, DiceSeed::from_u64(3));

    game.player_move(1).unwrap();

    assert_eq!(
        game.grid(Player::First).column(1).unwrap().slots(),
        &[Some(Face::SIX), Some(Face::FOUR), None]
    );
}

#[test]
fn game_over_rejects_every_later_move() {
    let full = Column::from_dice([Face::ONE; 3]).unwrap();
    let nearly = Grid::from_columns([full, full, Column::from_dice([Face::ONE; 2]).unwrap()]);
    let setup = GameSetup::new(Player::Second, Face::THREE).with_grid(Player::Second, nearly);
    let mut game = Game::from_setup(setup, DiceSeed::from_u64(4));

    let outcome = game.player_move(2).unwrap();
    assert!(outcome.game_over);
    assert!(game.game_over());

    let snapshot = (*game.grids(), game.turn(), game.pending_die(), game.move_count());
    for column in 0..3 {
        assert_eq!(game.player_move(column), Err(MoveError::GameOver));
    }
    assert_eq!(
        snapshot,
        (*game.grids(), game.turn(), game.pending_die(), game.move_count())
    );
}

#[test]
fn first_available_play_runs_to_completion() {
    for seed in 0..100 {
        let mut game = Game::with_seed(DiceSeed::from_u64(seed));
        while !game.game_over() {
            let column = game.available_moves()[0];
            game.player_move(column).unwrap();
            for grid in game.grids() {
                assert_grid_left_packed(grid);
                assert_eq!(grid.possible_moves().is_empty(), grid.is_full());
            }
        }
        assert!(game.grids().iter().any(Grid::is_full));
        assert!(game.available_moves().is_empty());
        assert!(game.result().is_some());
    }
}

#[test]
fn random_play_only_makes_legal_moves() {
    for seed in 0..100 {
        let mut game = Game::with_seed(DiceSeed::from_u64(seed));
        let mut policies = [RandomPolicy::with_seed(seed), RandomPolicy::with_seed(!seed)];
        let record = play_out(&mut game, &mut policies).unwrap();
        assert_eq!(record.seed, DiceSeed::from_u64(seed));
        assert_eq!(Some(record.result), game.result());

        let mut replay = Game::with_seed(record.seed);
        assert_eq!(replay.turn(), record.first_player);
        for outcome in &record.moves {
            assert_eq!(replay.turn(), outcome.player);
            assert!(replay.available_moves().contains(&outcome.column));
            assert_eq!(replay.player_move(outcome.column), Ok(*outcome));
        }
        assert!(replay.game_over());
        assert_eq!(replay.scores(), record.scores);
    }
}

#[test]
fn play_turn_drives_one_move_at_a_time() {
    let mut game = Game::with_seed(DiceSeed::from_u64(5));
    let mut policy = FirstAvailablePolicy;
    let before = game.turn();
    let outcome = play_turn(&mut game, &mut policy).unwrap();
    assert_eq!(outcome.player, before);
    assert_eq!(outcome.column, 0);
    assert_eq!(game.move_count(), 1);
}
