//! After stamping: tell the user how to print, wait, then destroy the files.

use bertocoin_utils::format_duration;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BLUE: &str = "\x1b[94m";
const RED: &str = "\x1b[31m";
const END_COLOR: &str = "\x1b[0m";

/// Shows the print instructions and securely removes the printable resources.
#[derive(Clone, Debug)]
pub struct CoinTerminator {
    dying_folder: PathBuf,
    printable_file: PathBuf,
    entropy_file: PathBuf,
    typing_delay: Duration,
}

impl CoinTerminator {
    pub fn new(printable_filepath: &Path, entropy_file: &Path) -> Self {
        let dying_folder = printable_filepath
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let printable_file = printable_filepath
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_default();
        Self {
            dying_folder,
            printable_file,
            entropy_file: entropy_file.to_path_buf(),
            typing_delay: Duration::from_millis(100),
        }
    }

    /// Delay between typed characters; zero prints lines at once.
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn dying_folder(&self) -> &Path {
        &self.dying_folder
    }

    /// Print the instructions to `out`, then run the countdown for `timeout_secs`.
    pub fn show_instructions(&self, out: &mut impl Write, timeout_secs: u64) -> io::Result<()> {
        let folder = absolute(&self.dying_folder);
        let folder_line = format!("    {BLUE}{}{END_COLOR} ", folder.display());
        let file_line = format!("    {BLUE}{}{END_COLOR} ", self.printable_file.display());
        let fast = self.typing_delay / 20;

        self.delayed_type(out, "INSTRUCTIONS", self.typing_delay)?;
        self.delayed_type(out, "------------", self.typing_delay)?;
        writeln!(out)?;
        self.delayed_type(out, "1.- Navigate to this folder: ", self.typing_delay)?;
        self.delayed_type(out, &folder_line, fast)?;
        writeln!(out)?;
        self.delayed_type(
            out,
            "2.- Use your browser (Safari, Chrome...) to open this file: ",
            self.typing_delay,
        )?;
        self.delayed_type(out, &file_line, fast)?;
        writeln!(out)?;
        self.delayed_type(out, "3.- Print it on good-quality paper.", self.typing_delay)?;
        writeln!(out)?;
        self.delayed_type(
            out,
            "4.- Follow the instructions provided in the template you just printed.",
            self.typing_delay,
        )?;
        writeln!(out)?;
        writeln!(out)?;

        self.delayed_type(out, &format!("{RED}WARNING:{END_COLOR}"), self.typing_delay)?;
        self.delayed_type(out, "--------", self.typing_delay)?;
        self.delayed_type(
            out,
            &format!(
                "You only have {} to print the template.",
                format_duration(timeout_secs)
            ),
            self.typing_delay,
        )?;
        self.delayed_type(out, "After that, all the files in the folder:", self.typing_delay)?;
        self.delayed_type(out, &folder_line, fast)?;
        self.delayed_type(
            out,
            "will be deleted, to protect the security of your coin.\n",
            self.typing_delay,
        )?;
        self.delayed_type(
            out,
            "If the self-destroy process does not finish properly, \
             please delete the contents of that folder manually.",
            self.typing_delay,
        )?;
        writeln!(out)?;

        self.countdown(timeout_secs);
        Ok(())
    }

    /// Progress bar that fills over `timeout_secs` seconds.
    pub fn countdown(&self, timeout_secs: u64) {
        if timeout_secs == 0 {
            return;
        }
        let bar = ProgressBar::new(timeout_secs);
        bar.set_style(
            ProgressStyle::with_template("{prefix} |{bar:50}| {percent}% ({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉-"),
        );
        bar.set_prefix("Self destroy timer:");
        for elapsed in 0..timeout_secs {
            bar.set_message(format!("{} left", format_duration(timeout_secs - elapsed)));
            std::thread::sleep(Duration::from_secs(1));
            bar.inc(1);
        }
        bar.finish_with_message("time is up");
    }

    /// Show the instructions, then destroy the files.
    ///
    /// The files are destroyed even when writing the instructions fails;
    /// that write error is returned only afterwards.
    pub fn show_and_destroy(&self, out: &mut impl Write, timeout_secs: u64) -> io::Result<bool> {
        let shown = self.show_instructions(out, timeout_secs);
        let destroyed = self.destroy_temp_folder(out);
        shown?;
        destroyed
    }

    /// Securely delete the temp folder and, if present, the entropy file.
    ///
    /// Both deletions run before anything is written to `out`, so a closed
    /// output cannot leave the files behind. Failures are reported to `out`
    /// as warnings asking the user to delete by hand; they never abort.
    /// Returns whether everything was removed.
    pub fn destroy_temp_folder(&self, out: &mut impl Write) -> io::Result<bool> {
        let mut report: Vec<u8> = Vec::new();
        let mut clean = true;

        writeln!(report)?;
        writeln!(report, "Destroying temporary folder...")?;
        if self.dying_folder.exists() {
            match secure_delete(&self.dying_folder) {
                Ok(()) => writeln!(report, "Done\n")?,
                Err(e) => {
                    clean = false;
                    tracing::warn!(path = %self.dying_folder.display(), error = %e, "secure delete failed");
                    writeln!(report, "{e}")?;
                    writeln!(report, "{RED}WARNING !!!{END_COLOR}")?;
                    writeln!(
                        report,
                        "  Unable to secure delete coin folder and its associated files: {}.",
                        self.dying_folder.display()
                    )?;
                    writeln!(
                        report,
                        "  Please remove them MANUALLY in a safe way, otherwise the security \
                         of the coin will be compromised.\n"
                    )?;
                }
            }
        }

        if self.entropy_file.is_file() {
            writeln!(report, "Destroying {}...", self.entropy_file.display())?;
            match secure_delete(&self.entropy_file) {
                Ok(()) => writeln!(report, "Done\n")?,
                Err(e) => {
                    clean = false;
                    tracing::warn!(path = %self.entropy_file.display(), error = %e, "secure delete failed");
                    writeln!(report, "{e}")?;
                    writeln!(report, "{RED}WARNING !!!{END_COLOR}")?;
                    writeln!(
                        report,
                        "  Unable to secure delete {}.",
                        self.entropy_file.display()
                    )?;
                    writeln!(
                        report,
                        "  Please remove it MANUALLY in a safe way, otherwise the security \
                         of the coin will be compromised.\n"
                    )?;
                }
            }
        }

        out.write_all(&report)?;
        out.flush()?;
        Ok(clean)
    }

    fn delayed_type(&self, out: &mut impl Write, text: &str, delay: Duration) -> io::Result<()> {
        if delay.is_zero() {
            writeln!(out, "{text}")?;
            return out.flush();
        }
        for c in text.chars() {
            write!(out, "{c}")?;
            out.flush()?;
            std::thread::sleep(delay);
        }
        writeln!(out)?;
        out.flush()
    }
}

/// Overwrite every file under `path` with zeros, sync, then remove it.
pub fn secure_delete(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            secure_delete(&entry?.path())?;
        }
        fs::remove_dir(path)
    } else {
        if metadata.is_file() {
            overwrite_with_zeros(path, metadata.len())?;
        }
        fs::remove_file(path)
    }
}

fn overwrite_with_zeros(path: &Path, len: u64) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).open(path)?;
    file.seek(SeekFrom::Start(0))?;
    let zeros = [0u8; 8192];
    let mut remaining = len;
    while remaining > 0 {
        let chunk = remaining.min(zeros.len() as u64) as usize;
        file.write_all(&zeros[..chunk])?;
        remaining -= chunk as u64;
    }
    file.sync_all()
}

fn absolute(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_printable_path() {
        let t = CoinTerminator::new(Path::new("delete-me/print-me.svg"), Path::new("entropy.txt"));
        assert_eq!(t.dying_folder(), Path::new("delete-me"));
        assert_eq!(t.printable_file, PathBuf::from("print-me.svg"));
    }

    #[test]
    fn secure_delete_removes_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("delete-me");
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("print-me.svg"), "secret").unwrap();
        fs::write(root.join("nested/qr.svg"), "secret").unwrap();
        secure_delete(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn secure_delete_missing_path_errors() {
        assert!(secure_delete(Path::new("/nonexistent/bertocoin")).is_err());
    }

    #[test]
    fn instructions_without_delay_or_countdown() {
        let t = CoinTerminator::new(Path::new("delete-me/print-me.svg"), Path::new("entropy.txt"))
            .with_typing_delay(Duration::ZERO);
        let mut out = Vec::new();
        t.show_instructions(&mut out, 0).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("INSTRUCTIONS"));
        assert!(text.contains("print-me.svg"));
        assert!(text.contains("You only have 0s to print the template."));
    }

    #[test]
    fn destroy_removes_folder_and_entropy_file() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("delete-me");
        fs::create_dir_all(&folder).unwrap();
        let printable = folder.join("print-me.svg");
        fs::write(&printable, "<svg/>").unwrap();
        let entropy = dir.path().join("entropy.txt");
        fs::write(&entropy, "passphrase").unwrap();

        let t = CoinTerminator::new(&printable, &entropy);
        let mut out = Vec::new();
        assert!(t.destroy_temp_folder(&mut out).unwrap());
        assert!(!folder.exists());
        assert!(!entropy.exists());
    }

    #[test]
    fn destroy_with_nothing_to_remove_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let t = CoinTerminator::new(
            &dir.path().join("gone/print-me.svg"),
            &dir.path().join("entropy.txt"),
        );
        let mut out = Vec::new();
        assert!(t.destroy_temp_folder(&mut out).unwrap());
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn closed_output_still_destroys_files() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("delete-me");
        fs::create_dir_all(&folder).unwrap();
        let printable = folder.join("print-me.svg");
        fs::write(&printable, "5J3btiKckkMpV9Ttm4epAt7Z8U3L8k3S8VsQm1rizSQ6DxE5gLi").unwrap();
        let entropy = dir.path().join("entropy.txt");
        fs::write(&entropy, "passphrase").unwrap();

        let t = CoinTerminator::new(&printable, &entropy).with_typing_delay(Duration::ZERO);
        let err = t.show_and_destroy(&mut ClosedOutput, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(!folder.exists());
        assert!(!entropy.exists());
    }

    #[test]
    fn destroy_deletes_before_reporting() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("delete-me");
        fs::create_dir_all(&folder).unwrap();
        let printable = folder.join("print-me.svg");
        fs::write(&printable, "<svg/>").unwrap();

        let t = CoinTerminator::new(&printable, &dir.path().join("entropy.txt"));
        assert!(t.destroy_temp_folder(&mut ClosedOutput).is_err());
        assert!(!folder.exists());
    }

    #[test]
    fn show_and_destroy_reports_clean_run() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("delete-me");
        fs::create_dir_all(&folder).unwrap();
        let printable = folder.join("print-me.svg");
        fs::write(&printable, "<svg/>").unwrap();

        let t = CoinTerminator::new(&printable, &dir.path().join("entropy.txt"))
            .with_typing_delay(Duration::ZERO);
        let mut out = Vec::new();
        assert!(t.show_and_destroy(&mut out, 0).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("INSTRUCTIONS"));
        assert!(text.contains("Destroying temporary folder..."));
        assert!(!folder.exists());
    }
}
