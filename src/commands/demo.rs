use std::rc::Rc;

use crossterm::style::Stylize;
use miette::{miette, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statewatch_observer::{HighStateReactor, LowStateReactor, Observer, Subject};

use crate::console::{self, ConsoleLog};
use crate::globals::is_verbose_enabled;

fn attach_reactor(
    subject: &mut Subject,
    reactor: &Rc<dyn Observer>,
    description: &str,
) {
    println!(
        "{}",
        format!("Subject: attaching the {}.", description).green()
    );
    subject.attach(Rc::clone(reactor));

    if is_verbose_enabled() {
        println!(
            "Subject: {} observer(s) now registered.",
            subject.observer_count()
        );
    }
}

fn detach_reactor(
    subject: &mut Subject,
    reactor: &Rc<dyn Observer>,
    description: &str,
) -> Result<()> {
    println!(
        "{}",
        format!("Subject: detaching the {}.", description).green()
    );
    subject.detach(reactor).wrap_err_with(|| {
        miette!("Failed to detach the {}.", description)
    })?;

    if is_verbose_enabled() {
        println!(
            "Subject: {} observer(s) now registered.",
            subject.observer_count()
        );
    }

    Ok(())
}

fn run_business_round<R: Rng>(subject: &mut Subject, rng: &mut R) {
    console::new_line();
    println!("{}", "Subject: I'm doing something important.".cyan());

    let new_state = subject.do_some_business_logic(rng);

    println!(
        "Subject: my state has just changed to: {}",
        new_state.to_string().bold()
    );
}

/// Runs the randomised demonstration sequence: attach both reactors, run the
/// business operation for `rounds` rounds, detach the high-state reactor and
/// run one final round without it.
///
/// With a `seed`, the whole run is reproducible; without one, the state draws
/// come from entropy.
pub fn cmd_simulate(seed: Option<u64>, rounds: usize) -> Result<()> {
    console::horizontal_line_with_text(
        &format!("statewatch {} - simulation", crate::STATEWATCH_VERSION),
        None,
        None,
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut subject = Subject::new();

    let low_reactor: Rc<dyn Observer> =
        Rc::new(LowStateReactor::new(ConsoleLog));
    let high_reactor: Rc<dyn Observer> =
        Rc::new(HighStateReactor::new(ConsoleLog));

    attach_reactor(&mut subject, &low_reactor, "low-state reactor");
    attach_reactor(&mut subject, &high_reactor, "high-state reactor");

    for _ in 0..rounds {
        run_business_round(&mut subject, &mut rng);
    }

    console::new_line();
    detach_reactor(&mut subject, &high_reactor, "high-state reactor")?;

    run_business_round(&mut subject, &mut rng);

    console::new_line();
    console::horizontal_line(None);

    Ok(())
}

/// Runs the deterministic boundary walkthrough: state 3 triggers only the
/// low-state reactor, state 9 only the high-state one, and once the
/// high-state reactor is detached, state 9 triggers nothing at all.
pub fn cmd_walkthrough() -> Result<()> {
    console::horizontal_line_with_text(
        &format!("statewatch {} - walkthrough", crate::STATEWATCH_VERSION),
        None,
        None,
    );

    let mut subject = Subject::new();

    let low_reactor: Rc<dyn Observer> =
        Rc::new(LowStateReactor::new(ConsoleLog));
    let high_reactor: Rc<dyn Observer> =
        Rc::new(HighStateReactor::new(ConsoleLog));

    attach_reactor(&mut subject, &low_reactor, "low-state reactor");
    attach_reactor(&mut subject, &high_reactor, "high-state reactor");

    console::new_line();
    println!("{}", "Setting state to 3 (below both bounds).".cyan());
    subject.set_state(3);

    console::new_line();
    println!("{}", "Setting state to 9 (above both bounds).".cyan());
    subject.set_state(9);

    console::new_line();
    detach_reactor(&mut subject, &high_reactor, "high-state reactor")?;

    console::new_line();
    println!(
        "{}",
        "Setting state to 9 again (no reactor fires this time).".cyan()
    );
    subject.set_state(9);

    console::new_line();
    console::horizontal_line(None);

    Ok(())
}
