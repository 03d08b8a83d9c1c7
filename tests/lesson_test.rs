use cgmath::{Matrix4, SquareMatrix, Vector4};
use instant::Duration;
use quad_lessons::{
    SettingsError,
    data_structures::quad::{QUAD_INDICES, QUAD_POSITIONS, QUAD_VERTICES, Vertex, placement_matrix},
    lesson::{self, Lesson},
};

const EPSILON: f32 = 1e-5;

#[test]
fn names_round_trip_through_from_str() {
    for lesson in Lesson::all() {
        assert_eq!(lesson.name().parse::<Lesson>(), Ok(lesson));
        assert_eq!(lesson.to_string(), lesson.name());
    }
    assert_eq!(" Texture-Blend ".parse::<Lesson>(), Ok(Lesson::TextureBlend));
}

#[test]
fn unknown_lesson_is_rejected() {
    assert_eq!(
        "triangle".parse::<Lesson>(),
        Err(SettingsError::UnknownLesson("triangle".to_string()))
    );
}

#[test]
fn clear_screen_draws_nothing() {
    let lesson = Lesson::ClearScreen;
    assert!(!lesson.draws_geometry());
    assert_eq!(lesson.quad_count(), 0);
    assert!(lesson.model_matrices(Duration::from_secs(3)).is_empty());
    assert!(lesson.textures().is_empty());
    let colour = lesson.clear_colour();
    assert_eq!((colour.r, colour.g, colour.b, colour.a), (0.5, 0.5, 0.3, 1.0));
}

#[test]
fn every_drawing_lesson_uses_the_teal_clear_colour() {
    for lesson in Lesson::all().into_iter().filter(Lesson::draws_geometry) {
        let colour = lesson.clear_colour();
        assert_eq!((colour.r, colour.g, colour.b, colour.a), (0.2, 0.3, 0.3, 1.0));
    }
}

#[test]
fn matrix_count_matches_quad_count() {
    for lesson in Lesson::all() {
        for secs in [0.0, 0.5, 12.25] {
            let matrices = lesson.model_matrices(Duration::from_secs_f32(secs));
            assert_eq!(matrices.len(), lesson.quad_count(), "{}", lesson);
        }
    }
}

#[test]
fn texture_and_blend_settings_follow_the_lesson() {
    assert_eq!(Lesson::ColouredQuad.shader_flags(), lesson::FLAG_VERTEX_COLOUR);
    assert_eq!(Lesson::TexturedQuad.textures(), &[lesson::CONTAINER_TEXTURE]);
    assert_eq!(
        Lesson::TexturedQuad.shader_flags(),
        lesson::FLAG_VERTEX_COLOUR | lesson::FLAG_TEXTURE
    );
    assert_eq!(Lesson::TexturedQuad.mix_factor(), 0.0);

    for blended in [Lesson::TextureBlend, Lesson::Transform, Lesson::Camera] {
        assert_eq!(
            blended.textures(),
            &[lesson::CONTAINER_TEXTURE, lesson::FACE_TEXTURE]
        );
        assert_eq!(blended.mix_factor(), lesson::MIX_FACTOR);
        assert_eq!(blended.shader_flags(), lesson::FLAG_TEXTURE | lesson::FLAG_BLEND);
    }
}

#[test]
fn only_the_camera_lesson_moves_the_camera() {
    let users: Vec<_> = Lesson::all()
        .into_iter()
        .filter(Lesson::uses_camera)
        .collect();
    assert_eq!(users, vec![Lesson::Camera]);
}

#[test]
fn static_lessons_keep_the_quad_in_place() {
    for lesson in [Lesson::ColouredQuad, Lesson::TexturedQuad, Lesson::TextureBlend] {
        assert_eq!(
            lesson.model_matrices(Duration::from_secs(7)),
            vec![Matrix4::identity()]
        );
    }
}

#[test]
fn transform_translates_then_spins_over_time() {
    let at_start = Lesson::Transform.model_matrices(Duration::ZERO)[0];
    let centre = at_start * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((centre.x - 0.5).abs() < EPSILON);
    assert!((centre.y + 0.5).abs() < EPSILON);

    // a quarter turn sends the top right corner to the top left
    let quarter = Duration::from_secs_f32(std::f32::consts::FRAC_PI_2);
    let spun = Lesson::Transform.model_matrices(quarter)[0];
    let corner = spun * Vector4::new(0.5, 0.5, 0.0, 1.0);
    assert!((corner.x - 0.0).abs() < 1e-4);
    assert!((corner.y - 0.0).abs() < 1e-4);

    let centre = spun * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((centre.x - 0.5).abs() < EPSILON);
    assert!((centre.y + 0.5).abs() < EPSILON);
}

#[test]
fn camera_lesson_places_quads_at_the_table_positions() {
    let matrices = Lesson::Camera.model_matrices(Duration::from_secs(1));
    assert_eq!(matrices.len(), QUAD_POSITIONS.len());
    for (matrix, position) in matrices.iter().zip(QUAD_POSITIONS) {
        let centre = matrix * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((centre.x - position[0]).abs() < EPSILON);
        assert!((centre.y - position[1]).abs() < EPSILON);
        assert!((centre.z - position[2]).abs() < EPSILON);
    }
    // the first quad is not rotated
    assert_eq!(placement_matrix(0), Matrix4::identity());
}

#[test]
fn placement_wraps_past_the_table() {
    let wrapped = placement_matrix(QUAD_POSITIONS.len());
    let centre = wrapped * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!(centre.x.abs() < EPSILON);
    assert!(centre.y.abs() < EPSILON);
    assert!(centre.z.abs() < EPSILON);
}

#[test]
fn quad_indices_form_two_triangles_over_four_corners() {
    assert_eq!(QUAD_INDICES, [0, 1, 3, 1, 2, 3]);
    assert!(
        QUAD_INDICES
            .iter()
            .all(|&index| (index as usize) < QUAD_VERTICES.len())
    );
}

#[test]
fn quad_spans_half_a_unit_with_matching_texture_coordinates() {
    for vertex in QUAD_VERTICES {
        assert_eq!(vertex.position[2], 0.0);
        assert_eq!(vertex.position[0].abs(), 0.5);
        assert_eq!(vertex.position[1].abs(), 0.5);
        assert_eq!(vertex.tex_coords[0], vertex.position[0] + 0.5);
        assert_eq!(vertex.tex_coords[1], vertex.position[1] + 0.5);
    }
}

#[test]
fn vertex_layout_matches_struct() {
    let layout = Vertex::desc();
    assert_eq!(layout.array_stride, 32);
    assert_eq!(layout.attributes.len(), 3);
    assert_eq!(layout.attributes[1].offset, 12);
    assert_eq!(layout.attributes[2].offset, 24);
    assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&QUAD_VERTICES).len(), 4 * 32);
}
