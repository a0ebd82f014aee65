use triadsolver::solver::{AlphaBeta, InMemoryMemo, Max, MemoTable, Min, NoMemo, INF};
use triadsolver::{canonical_key, Card, Deck, GameState, Player, Solver, SolverConfig};

fn game(first: Player) -> GameState {
    let d1 = Deck::new(vec![
        Card::new(1, "Dodo", 1, [4, 2, 3, 2]),
        Card::new(2, "Spriggan", 1, [2, 4, 4, 2]),
        Card::new(3, "Pudding", 1, [4, 3, 2, 3]),
        Card::new(4, "Ultros", 3, [6, 3, 5, 4]),
        Card::new(5, "Bahamut", 5, [9, 5, 6, 8]),
    ]);
    let d2 = Deck::new(vec![
        Card::new(6, "Mandragora", 1, [2, 3, 4, 3]),
        Card::new(7, "Tonberry", 1, [2, 2, 4, 4]),
        Card::new(8, "Siren", 2, [4, 5, 3, 3]),
        Card::new(9, "Ifrit", 4, [6, 5, 6, 3]),
        Card::new(10, "Shiva", 4, [6, 6, 3, 5]),
    ]);
    GameState::new(d1, d2, first).unwrap()
}

fn midgame_p1() -> GameState {
    let mut s = game(Player::One);
    s.play_card(Player::One, "Pudding", 1, 1).unwrap();
    s.play_card(Player::Two, "Siren", 0, 1).unwrap();
    s.play_card(Player::One, "Dodo", 2, 0).unwrap();
    s.play_card(Player::Two, "Tonberry", 1, 2).unwrap();
    s
}

fn midgame_p2() -> GameState {
    let mut s = game(Player::Two);
    s.play_card(Player::Two, "Ifrit", 0, 0).unwrap();
    s.play_card(Player::One, "Spriggan", 2, 2).unwrap();
    s.play_card(Player::Two, "Mandragora", 0, 2).unwrap();
    s.play_card(Player::One, "Ultros", 1, 1).unwrap();
    s
}

#[test]
fn hashmap_and_no_memo_agree_on_value_and_move() {
    let s = midgame_p1();

    let mut hm = InMemoryMemo::default();
    let mut ab = AlphaBeta::new(&mut hm);
    let with = ab.search::<Max>(&s, -INF, INF).unwrap();
    let nodes_with = ab.nodes;

    let mut none = NoMemo;
    let mut ab = AlphaBeta::new(&mut none);
    let without = ab.search::<Max>(&s, -INF, INF).unwrap();
    let nodes_without = ab.nodes;

    assert_eq!(with, without, "memoization changed the result");
    assert!(hm.len() > 0);
    assert_eq!(none.len(), 0);
    assert!(nodes_with <= nodes_without);
}

#[test]
fn memo_toggle_is_transparent_for_both_sides() {
    for (state, player) in [(midgame_p1(), Player::One), (midgame_p2(), Player::Two)] {
        let on = Solver::new(SolverConfig::default())
            .search(&state, player)
            .unwrap();
        let off = Solver::new(SolverConfig { memoize: false, ..SolverConfig::default() })
            .search(&state, player)
            .unwrap();
        assert_eq!(on.value, off.value);
        assert_eq!(on.best_move, off.best_move);
        assert_eq!(off.memo_hits, 0);
        assert!(on.nodes <= off.nodes);
    }
}

#[test]
fn min_search_memo_parity() {
    let s = midgame_p2();
    assert_eq!(s.to_act(), Player::Two);

    let mut hm = InMemoryMemo::with_capacity(1024);
    let with = AlphaBeta::new(&mut hm).search::<Min>(&s, -INF, INF).unwrap();
    let without = AlphaBeta::new(&mut NoMemo).search::<Min>(&s, -INF, INF).unwrap();
    assert_eq!(with, without);
}

#[test]
fn parallel_matches_sequential() {
    for (state, player) in [(midgame_p1(), Player::One), (midgame_p2(), Player::Two)] {
        let seq = Solver::default().search(&state, player).unwrap();
        for memoize in [true, false] {
            let cfg = SolverConfig { parallel: true, memoize, ..SolverConfig::default() };
            let par = Solver::new(cfg).search(&state, player).unwrap();
            assert_eq!(par.value, seq.value, "value differs (memoize={memoize})");
            assert_eq!(par.best_move, seq.best_move, "move differs (memoize={memoize})");
        }
    }
}

#[test]
fn transpositions_share_a_key() {
    let base = game(Player::One);

    let mut a = base.clone();
    a.play_card(Player::One, "Dodo", 0, 0).unwrap();
    a.play_card(Player::Two, "Tonberry", 2, 2).unwrap();
    a.play_card(Player::One, "Spriggan", 0, 2).unwrap();

    let mut b = base;
    b.play_card(Player::One, "Spriggan", 0, 2).unwrap();
    b.play_card(Player::Two, "Tonberry", 2, 2).unwrap();
    b.play_card(Player::One, "Dodo", 0, 0).unwrap();

    assert_ne!(a.moves, b.moves);
    assert_eq!(canonical_key(&a), canonical_key(&b));
    assert_eq!(
        triadsolver::state_fingerprint(&a),
        triadsolver::state_fingerprint(&b)
    );

    let mut c = a.clone();
    c.play_card(Player::Two, "Siren", 1, 1).unwrap();
    assert_ne!(canonical_key(&a), canonical_key(&c));
}
