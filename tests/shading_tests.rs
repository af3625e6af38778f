// Host-side tests for the CPU reference of the fragment program.
// The main crate is wasm-only, so these exercise blackhole-core directly.

use blackhole_core::shading::*;
use glam::{Vec2, Vec4};

const RES: Vec2 = Vec2::new(800.0, 600.0);

fn unmasked(inputs: &ShadeInputs, frag: Vec2) -> Vec4 {
    let uv = inputs.view_coord(frag);
    let bg = stars(uv * lens_factor(uv.length()));
    let disk = disk_color(disk_intensity(disk_frame(uv, inputs.time)));
    (glam::Vec3::splat(bg) + disk + bloom(disk)).extend(1.0)
}

#[test]
fn center_pixel_is_black() {
    let inputs = ShadeInputs::new(RES, 0.0, 0.0);
    let frag = Vec2::new(400.0, 300.0);
    assert_eq!(inputs.view_coord(frag), Vec2::ZERO);
    assert_eq!(horizon_mask(0.0), 1.0);
    assert_eq!(inputs.shade(frag), Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn inside_horizon_is_forced_black() {
    for (time, cam_rot) in [(0.0, 0.0), (3.7, 0.4), (120.0, -0.6)] {
        let inputs = ShadeInputs::new(RES, time, cam_rot);
        for dy in -40..=40 {
            for dx in -40..=40 {
                let frag = Vec2::new(400.5 + dx as f32, 300.5 + dy as f32);
                let r = inputs.view_coord(frag).length();
                if r >= 0.16 - 1e-3 {
                    continue;
                }
                assert_eq!(
                    inputs.shade(frag),
                    Vec4::new(0.0, 0.0, 0.0, 1.0),
                    "r={r} frag={frag:?}"
                );
            }
        }
    }
}

#[test]
fn outside_horizon_is_unaffected() {
    let inputs = ShadeInputs::new(RES, 1.25, 0.1);
    let mut checked = 0;
    for y in (0..600).step_by(7) {
        for x in (0..800).step_by(7) {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let r = inputs.view_coord(frag).length();
            if r <= 0.18 + 1e-3 {
                continue;
            }
            assert_eq!(horizon_mask(r), 0.0);
            assert_eq!(inputs.shade(frag), unmasked(&inputs, frag));
            checked += 1;
        }
    }
    assert!(checked > 1000);
}

#[test]
fn horizon_edge_is_soft() {
    let mut prev = horizon_mask(0.16);
    assert_eq!(prev, 1.0);
    for i in 1..=20 {
        let m = horizon_mask(0.16 + 0.001 * i as f32);
        assert!(m <= prev, "mask must fall monotonically");
        prev = m;
    }
    assert_eq!(horizon_mask(0.18), 0.0);
    let mid = horizon_mask(0.17);
    assert!(mid > 0.4 && mid < 0.6);
}

#[test]
fn lensing_pulls_background_inward() {
    assert_eq!(lens_factor(0.0), 1.0);
    assert!(lens_factor(0.5) < 1.0);
    assert!(lens_factor(1.0) < lens_factor(0.5));
}

fn find_lit_cell() -> Vec2 {
    for y in -90..90 {
        for x in -90..90 {
            let id = Vec2::new(x as f32, y as f32);
            if star_hash(id) >= 0.996 {
                return id;
            }
        }
    }
    panic!("no lit star cell in search window");
}

#[test]
fn lit_cell_shows_a_dot_at_its_center() {
    let id = find_lit_cell();
    let center = (id + Vec2::splat(0.5)) / 90.0;
    assert!(stars(center) > 0.99);
    // Near the cell corner the dot has faded out
    let corner = (id + Vec2::splat(0.1)) / 90.0;
    assert_eq!(stars(corner), 0.0);
}

/// View coordinate whose lensed sample lands on the center of a lit star cell.
fn lit_star_view_coord() -> Vec2 {
    for y in -40..40 {
        for x in -40..40 {
            let id = Vec2::new(x as f32, y as f32);
            if star_hash(id) < 0.996 {
                continue;
            }
            let c = (id + Vec2::splat(0.5)) / 90.0;
            // lens is radial: |uv| * lens(|uv|) = |c|  =>  uv = c / (1 - 1.4 |c|)
            let uv = c / (1.0 - 1.4 * c.length());
            let r = uv.length();
            if r > 0.25 && r < 0.9 {
                return uv;
            }
        }
    }
    panic!("no lit star cell visible in the frame");
}

#[test]
fn starfield_is_stable_over_time() {
    let cam_rot = 0.2;
    let uv = lit_star_view_coord();
    let frag = view_to_frag(rotate(uv, -cam_rot), RES);

    let a = ShadeInputs::new(RES, 0.0, cam_rot);
    let b = ShadeInputs::new(RES, 57.3, cam_rot);
    assert!(a.view_coord(frag).abs_diff_eq(uv, 1e-5));
    assert_eq!(a.view_coord(frag), b.view_coord(frag));

    let bg_a = a.shade(frag).x - disk_and_bloom_red(&a, frag);
    let bg_b = b.shade(frag).x - disk_and_bloom_red(&b, frag);
    assert!(bg_a > 0.9, "star at t=0: {bg_a}");
    assert!(bg_b > 0.9, "star at t=57.3: {bg_b}");
    assert!((bg_a - bg_b).abs() < 1e-5);
}

fn disk_and_bloom_red(inputs: &ShadeInputs, frag: Vec2) -> f32 {
    let disk = disk_color(disk_intensity(disk_frame(inputs.view_coord(frag), inputs.time)));
    (disk + bloom(disk)).x
}

#[test]
fn disk_peaks_at_ring_radius() {
    let peak = disk_intensity(Vec2::new(0.38, 0.0));
    assert!((peak - 1.0).abs() < 1e-6);
    for y in [0.0_f32, 0.05] {
        let at = |radius: f32| disk_intensity(Vec2::new((radius * radius - y * y).sqrt(), y));
        let top = at(0.38);
        let mut inner = top;
        let mut outer = top;
        for k in 1..=30 {
            let delta = 0.005 * k as f32;
            let i = at(0.38 - delta);
            let o = at(0.38 + delta);
            assert!(i < inner, "inner side not decreasing at y={y} delta={delta}");
            assert!(o < outer, "outer side not decreasing at y={y} delta={delta}");
            inner = i;
            outer = o;
        }
    }
}

#[test]
fn disk_swirls_with_time() {
    let uv = Vec2::new(0.3, 0.1);
    let d0 = disk_frame(uv, 0.0);
    let d1 = disk_frame(uv, 1.0);
    assert!((d0.length() - d1.length()).abs() < 1e-6);
    let turned = d0.angle_between(d1);
    assert!((turned - 0.4).abs() < 1e-4);
}

#[test]
fn aspect_ratio_stretches_x() {
    let res = Vec2::new(200.0, 100.0);
    let right = normalize_coord(Vec2::new(200.0, 50.0), res);
    let top = normalize_coord(Vec2::new(100.0, 100.0), res);
    assert!((right.x - 2.0).abs() < 1e-6);
    assert!((top.y - 1.0).abs() < 1e-6);
    assert!((right.x / top.y - 2.0).abs() < 1e-6);
}

#[test]
fn ring_pixel_is_dominated_by_warm_disk() {
    let inputs = ShadeInputs::new(RES, 0.0, 0.0);
    // Point on the disk's tilted x-axis at the ring radius
    let view = rotate(Vec2::new(0.38, 0.0), -0.6);
    let frag = view_to_frag(view, RES);

    let uv = inputs.view_coord(frag);
    assert!((uv.length() - 0.38).abs() < 1e-4);
    assert_eq!(horizon_mask(uv.length()), 0.0);

    let c = inputs.shade(frag);
    // diskCol ~ (1.2, 0.55, 0.25), plus bloom 1.3 * diskCol^2
    assert!(c.x > 2.9 && c.x < 3.2, "red {}", c.x);
    assert!(c.y > 0.8 && c.y < 1.0, "green {}", c.y);
    assert!(c.z > 0.3 && c.z < 0.4, "blue {}", c.z);
    assert_eq!(c.w, 1.0);
}

#[test]
fn output_is_unclamped() {
    let inputs = ShadeInputs::new(RES, 0.0, 0.0);
    let frag = view_to_frag(rotate(Vec2::new(0.38, 0.0), -0.6), RES);
    assert!(inputs.shade(frag).x > 1.0);
}

#[test]
fn render_image_is_opaque_with_black_core() {
    let (w, h) = (64, 48);
    let img = render_image(w, h, 2.0, 0.3);
    assert_eq!(img.len(), (w * h) as usize);
    assert!(img.iter().all(|c| c.w == 1.0 && c.is_finite()));
    let center = img[(h / 2 * w + w / 2) as usize];
    assert_eq!(center, Vec4::new(0.0, 0.0, 0.0, 1.0));
}
