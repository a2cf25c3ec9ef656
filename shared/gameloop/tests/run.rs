use gameloop::{FrameAction, GameLoop};
use std::time::Duration;

#[test]
fn frameskip_is_bounded() {
    let gameloop = GameLoop::new(100, 3);

    // fall well behind
    std::thread::sleep(Duration::from_millis(100));

    let ticks = gameloop
        .start_frame()
        .actions()
        .filter(|a| *a == FrameAction::Tick)
        .count();
    assert_eq!(ticks, 3);
}

#[test]
#[ignore]
fn run_loop() {
    let gameloop = GameLoop::new(20, 5);

    for f in 0..10 {
        println!("--- start frame {}", f);
        std::thread::sleep(Duration::from_millis(153));

        let frame = gameloop.start_frame();
        for (i, action) in frame.actions().enumerate() {
            println!("{}): {:?}", i, action);
        }
    }
}
