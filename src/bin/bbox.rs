use geobbox::{has_area, Bounded, GeometryTree};
use std::fs::File;
use std::io::BufReader;

type Error = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Error>;

fn main() -> Result<()> {
    let mut args = std::env::args();
    let bin_name = args.next().expect("Missing bin name");
    let input_path = args.next().unwrap_or_else(|| {
        panic!("Missing input path.\nUsage:\n\t`{bin_name} <input-path.geojson>`")
    });

    let input = BufReader::new(File::open(&input_path)?);
    let Some(tree) = GeometryTree::from_reader(input)? else {
        eprintln!("{input_path} is not a geometry tree");
        println!("null");
        return Ok(());
    };

    let bbox = tree.bbox();
    println!("{}", serde_json::to_string(&bbox)?);

    if let Some(bbox) = &bbox {
        eprintln!("   center: {:?}", bbox.center());
        eprintln!("    width: {}", bbox.width());
        eprintln!("   height: {}", bbox.height());
    }
    eprintln!(" has_area: {}", has_area(bbox.as_ref()));
    Ok(())
}
