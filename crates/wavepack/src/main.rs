fn main() {
    wave_render::run();
}
