use {
    anyhow::{Result, bail},
    std::path::PathBuf,
    stroke::Handedness,
};

pub const USAGE: &str = "usage: analyze <poses.json> [--left] [--stroke <label>] [--student <name>]";

/// Command line of the `analyze` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub poses: PathBuf,
    pub handedness: Handedness,
    pub stroke: String,
    pub student: String,
}

impl Args {
    /// Parse arguments, not including the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut poses = None;
        let mut handedness = Handedness::Right;
        let mut stroke = "forehand".to_string();
        let mut student = "unknown".to_string();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--left" => handedness = Handedness::Left,
                "--right" => handedness = Handedness::Right,
                "--stroke" => match args.next() {
                    Some(value) => stroke = value,
                    None => bail!("--stroke needs a value\n{USAGE}"),
                },
                "--student" => match args.next() {
                    Some(value) => student = value,
                    None => bail!("--student needs a value\n{USAGE}"),
                },
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                path => {
                    if poses.is_some() {
                        bail!("more than one pose file given\n{USAGE}");
                    }
                    poses = Some(PathBuf::from(path));
                }
            }
        }

        let Some(poses) = poses else {
            bail!("{USAGE}");
        };
        Ok(Self {
            poses,
            handedness,
            stroke,
            student,
        })
    }
}
