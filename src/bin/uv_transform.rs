use rgba_thumbs::uv_transform;

fn main() {
    println!("Mapped UVs:");
    for uv in uv_transform::mapped_uvs() {
        println!("{:?}", uv);
    }
}
