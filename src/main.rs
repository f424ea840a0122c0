use tbox_rs::{BoundingBox, Point, TboxError, tiles_for_bounds};

fn main() -> Result<(), TboxError> {
    env_logger::init();

    let lng = -87.65;
    let lat = 41.84;

    let tile = Point::new(lng, lat).to_tile(11)?;

    println!("Tile: {}", tile);
    println!("Box: {:?}", tile.to_box());
    println!("Center: {:?}", tile.center());
    println!("Parent: {}", tile.parent());
    for child in tile.children() {
        println!("Child: {}", child);
    }

    let bering = BoundingBox::new(178.65, 70.81, -177.58, 71.6);
    for tile in tiles_for_bounds(&bering, 7)? {
        println!("Bering Strait: {}", tile);
    }

    Ok(())
}
