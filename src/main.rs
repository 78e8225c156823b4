//! Fruit Catch entry point
//!
//! The playable build is the wasm library surface; the native binary runs a
//! short headless session as a smoke demo.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fruit_catch::sim::{self, PcgSpawn, Session, StartOptions};

    env_logger::init();
    log::info!("Fruit Catch (native) starting headless demo...");

    let mut session = Session::new();
    let mut spawn = PcgSpawn::new(0xF00D);
    session.set_end_listener(|end| {
        log::info!(
            "game over ({:?}): score {} level {}",
            end.reason,
            end.score,
            end.level
        );
    });

    let countdown = session.start(StartOptions { time_limit: 10 });

    // 60 frames per simulated second; the catcher holds CENTER throughout
    'seconds: for second in 1..=10u32 {
        for _ in 0..60 {
            sim::tick(&mut session, &mut spawn);
            if !session.active {
                break 'seconds;
            }
        }
        session.second_elapsed(&countdown);
        println!(
            "t+{second:>2}s  score {:>5}  level {}  items {}",
            session.score,
            session.level,
            session.items.len()
        );
        if !session.active {
            break;
        }
    }

    println!(
        "final: score {} level {}",
        session.score, session.level
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM builds are driven through the platform::web bindings
}
