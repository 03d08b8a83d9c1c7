#[test]
#[cfg(feature = "integration-tests")]
fn should_render_textured_quad_lesson_frames_and_exit() {
    use quad_lessons::{Lesson, Settings};

    let settings = Settings {
        lesson: Lesson::TexturedQuad,
        exit_after_frames: Some(3),
        vsync: false,
        ..Settings::default()
    };

    quad_lessons::run(settings).expect("lesson should render and exit cleanly");
}
