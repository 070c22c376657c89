use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-shrink",
    about = "A batch image resizer that shrinks images to a new largest dimension",
    long_about = "img-shrink resizes every image in a directory so that its largest side matches \
                  a given pixel size, preserving the aspect ratio and the EXIF orientation of \
                  each image. Images already smaller than the target are left untouched and \
                  non-image files are skipped; both are reported in the log file. \
                  It can not be used to enlarge images.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-shrink -s 1200px\n  \
    img-shrink -d ./photos -r ./photos/small -s 800\n  \
    img-shrink -l pt_BR -f ./out/resize.log"
)]
pub struct Args {
    #[arg(short = 'd', long, help = "Directory with the images to resize")]
    pub images_dir: Option<PathBuf>,

    #[arg(short = 'r', long, help = "Directory where the resized images are written")]
    pub resized_dir: Option<PathBuf>,

    #[arg(
        short = 'l',
        long,
        help = "Language of the output messages in ll_LL format",
        long_help = "Language of the output messages in ll_LL format (e.g. en_US, pt_BR). \
                     Catalogs are looked up in the ./language directory; an unknown language \
                     falls back to en_US with a warning."
    )]
    pub language: Option<String>,

    #[arg(short = 'e', long, help = "Output messages encoding (catalogs are UTF-8)")]
    pub encoding: Option<String>,

    #[arg(
        short = 'f',
        long,
        help = "Name of the log file (specify the full path if needed)",
        long_help = "Name of the log file (specify the full path if needed). \
                     The file is overwritten on every run; its directory must already exist."
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        short = 's',
        long,
        help = "New size of the images' largest dimension (e.g. 1200, 1200px or '1200 px')",
        long_help = "New size, in pixels, of the images' largest dimension. \
                     Accepts the forms 1200, 1200px and '1200 px'. \
                     When omitted, the size is asked for interactively."
    )]
    pub size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_flags_parse() {
        let args = Args::parse_from([
            "img-shrink",
            "-d",
            "./photos",
            "-r",
            "./photos/small",
            "-l",
            "pt_BR",
            "-e",
            "utf-8",
            "-f",
            "run.log",
            "-s",
            "1200px",
        ]);

        assert_eq!(args.images_dir, Some(PathBuf::from("./photos")));
        assert_eq!(args.resized_dir, Some(PathBuf::from("./photos/small")));
        assert_eq!(args.language.as_deref(), Some("pt_BR"));
        assert_eq!(args.encoding.as_deref(), Some("utf-8"));
        assert_eq!(args.log_file, Some(PathBuf::from("run.log")));
        assert_eq!(args.size.as_deref(), Some("1200px"));
    }

    #[test]
    fn test_no_flags_are_required() {
        let args = Args::parse_from(["img-shrink"]);
        assert!(args.images_dir.is_none());
        assert!(args.size.is_none());
    }
}
