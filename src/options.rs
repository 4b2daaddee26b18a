use ppmlife::{Image, Pixel};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, getopts::Fail> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("p", "parallel", "compute the generation across threads");
        opts.optflag(
            "",
            "strict",
            "fail when the pixel count disagrees with the declared size",
        );
        opts.optopt("o", "output", "write the result to FILE instead of stdout", "FILE");
        opts.optopt("f", "fill", "generate the starting grid instead of reading a file", "TYPE");
        opts.optopt("w", "width", "generated grid width", "WIDTH");
        opts.optopt("h", "height", "generated grid height", "HEIGHT");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: ppmlife [options] [LIST_FILE]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, getopts::Fail> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<usize> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<usize> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn parallel(&self) -> bool {
        self.matches.opt_present("parallel")
    }
    pub fn strict(&self) -> bool {
        self.matches.opt_present("strict")
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (self.width().unwrap_or(256), self.height().unwrap_or(256))
    }
    pub fn fill_mode(&self) -> Option<FillMode> {
        let mode_str = self.matches.opt_str("fill")?;
        Some(FillMode::new(&mode_str).expect("valid fill mode string"))
    }

    /// The positional argument: a file whose first token names the image.
    pub fn list_file(&self) -> Option<&str> {
        self.matches.free.first().map(String::as_str)
    }
    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
}

pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, row: usize, col: usize, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (row + col) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    pub fn create_image(&self, width: usize, height: usize) -> Image {
        let mut image = Image::new(width, height);
        let mut rng = rand::rng();
        for row in 0..height {
            for col in 0..width {
                if self.fill_cell(row, col, &mut rng) {
                    image.set(row, col, Pixel::splat(1));
                }
            }
        }
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_fill(fill: &str) -> Args {
        Args::new(&["--fill", fill])
            .expect("parsable args")
            .expect("args with fill")
    }

    #[test]
    fn fill_mode_parses() {
        let args = args_with_fill("alternating");

        assert!(matches!(args.fill_mode(), Some(FillMode::Alternating)));
    }

    #[test]
    fn free_argument_is_the_list_file() {
        let args = Args::new(&["--strict", "jobs.txt"])
            .expect("parsable args")
            .expect("non-help args");

        assert_eq!(args.list_file(), Some("jobs.txt"));
        assert!(args.strict());
        assert!(!args.parallel());
    }

    #[test]
    fn create_image_all_fills_grid() {
        let image = FillMode::All.create_image(3, 2);

        assert!(image.cells().iter().all(|p| *p == Pixel::splat(1)));
    }

    #[test]
    fn create_image_empty_is_dead() {
        let image = FillMode::Empty.create_image(5, 4);

        assert!(image.cells().iter().all(|p| p.red == 0));
    }

    #[test]
    fn create_image_alternating_uses_parity() {
        let image = FillMode::Alternating.create_image(3, 3);

        assert_eq!(image.get(0, 0), Some(Pixel::splat(1)));
        assert_eq!(image.get(0, 1), Some(Pixel::splat(0)));
        assert_eq!(image.get(1, 1), Some(Pixel::splat(1)));
        assert_eq!(image.get(2, 0), Some(Pixel::splat(1)));
    }

    #[test]
    fn create_image_random_is_binary() {
        let image = FillMode::Random.create_image(4, 3);

        assert_eq!(image.cells().len(), 12);
        assert!(image.cells().iter().all(|p| p.red == 0 || p.red == 1));
    }
}
