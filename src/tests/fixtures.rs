use crate::mdp::TabularMdp;

pub type StrMdp = TabularMdp<&'static str, &'static str>;

/// `A --go(1.0, +10)--> B`, `B` terminal
pub fn two_state() -> StrMdp {
    let mut mdp = TabularMdp::new();
    mdp.add_transition("A", "go", "B", 1.0, 10.0);
    mdp.add_terminal("B");
    mdp
}

/// States ordered `[A, B, C]`; `A -> B` pays 1, `B -> C` pays 2, `C` terminal
pub fn three_in_a_row() -> StrMdp {
    let mut mdp = TabularMdp::new();
    mdp.add_state("A");
    mdp.add_state("B");
    mdp.add_terminal("C");
    mdp.add_transition("A", "next", "B", 1.0, 1.0);
    mdp.add_transition("B", "next", "C", 1.0, 2.0);
    mdp
}

/// `s` has two actions reaching terminal `t` with identical Q-values
pub fn tied_actions() -> StrMdp {
    let mut mdp = TabularMdp::new();
    mdp.add_transition("s", "left", "t", 1.0, 1.0);
    mdp.add_transition("s", "right", "t", 0.5, 2.0);
    mdp.add_transition("s", "right", "s2", 0.5, 0.0);
    mdp.add_transition("s", "stay", "s", 1.0, 0.0);
    mdp.add_terminal("t");
    mdp.add_terminal("s2");
    mdp
}

/// Small stochastic MDP with a self-loop, a dead end and two exits
pub fn stochastic() -> StrMdp {
    let mut mdp = TabularMdp::new();
    mdp.add_transition("start", "safe", "mid", 1.0, 0.0);
    mdp.add_transition("start", "risky", "win", 0.5, 5.0);
    mdp.add_transition("start", "risky", "lose", 0.5, -5.0);
    mdp.add_transition("mid", "push", "win", 0.7, 3.0);
    mdp.add_transition("mid", "push", "mid", 0.3, -0.1);
    mdp.add_transition("mid", "back", "start", 1.0, 0.0);
    mdp.add_transition("mid", "hide", "dead_end", 1.0, 0.0);
    mdp.add_state("dead_end");
    mdp.add_terminal("win");
    mdp.add_terminal("lose");
    mdp
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} within {}, got {}",
        expected,
        tol,
        actual
    );
}
