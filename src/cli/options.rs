//! The option table
//!
//! Every switch the client understands, in the order help lists them.

/// Identifies one switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionId {
    Destination,
    Force,
    Help,
    Message,
    Quiet,
    Recursive,
    NonRecursive,
    Revision,
    Date,
    FileData,
    XmlFile,
    Locale,
    Version,
    Verbose,
    VeryVerbose,
    ShowUpdates,
    Username,
    Password,
    Extensions,
}

/// Static description of one switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    pub id: OptionId,
    pub long: &'static str,
    /// Single-letter form, `None` for long-only switches
    pub short: Option<char>,
    pub takes_value: bool,
    pub description: &'static str,
}

const fn def(
    id: OptionId,
    long: &'static str,
    short: Option<char>,
    takes_value: bool,
    description: &'static str,
) -> OptionDefinition {
    OptionDefinition {
        id,
        long,
        short,
        takes_value,
        description,
    }
}

static OPTIONS: [OptionDefinition; 19] = [
    def(OptionId::Destination, "destination", Some('d'), true, "put results in newly-created directory name"),
    def(OptionId::Force, "force", None, false, "force operation to run"),
    def(OptionId::Help, "help", Some('h'), false, "show help on a subcommand"),
    def(OptionId::Message, "message", Some('m'), true, "specify commit message"),
    def(OptionId::Quiet, "quiet", Some('q'), false, "print as little as possible"),
    def(OptionId::Recursive, "recursive", None, false, "descend recursively"),
    def(OptionId::NonRecursive, "nonrecursive", Some('n'), false, "operate on single directory only"),
    def(OptionId::Revision, "revision", Some('r'), true, "specify revision number (or X:Y range)"),
    def(OptionId::Date, "date", Some('D'), true, "specify a date (instead of a revision)"),
    def(OptionId::FileData, "filedata", Some('F'), true, "read data from specified file"),
    def(OptionId::XmlFile, "xml-file", None, true, "read/write xml to specified file"),
    def(OptionId::Locale, "locale", None, true, "specify a locale to use"),
    def(OptionId::Version, "version", None, false, "print client version info"),
    def(OptionId::Verbose, "verbose", Some('v'), false, "print extra information"),
    def(OptionId::VeryVerbose, "very-verbose", Some('V'), false, "print maximum information"),
    def(OptionId::ShowUpdates, "show-updates", Some('u'), false, "display update information"),
    def(OptionId::Username, "username", None, true, "specify a username [optional]"),
    def(OptionId::Password, "password", None, true, "specify a password [optional]"),
    def(OptionId::Extensions, "extensions", Some('x'), true, "pass options through to GNU diff process"),
];

/// Read-only view over the option definitions
#[derive(Debug, Clone, Copy)]
pub struct OptionTable {
    options: &'static [OptionDefinition],
}

impl OptionTable {
    /// The client's switches
    pub const fn builtin() -> Self {
        Self { options: &OPTIONS }
    }

    /// Look a switch up by its identifier
    pub fn get(&self, id: OptionId) -> Option<&'static OptionDefinition> {
        self.options.iter().find(|opt| opt.id == id)
    }

    /// Look a switch up by its long name
    pub fn by_long(&self, long: &str) -> Option<&'static OptionDefinition> {
        self.options.iter().find(|opt| opt.long == long)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static OptionDefinition> {
        self.options.iter()
    }
}

impl Default for OptionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
