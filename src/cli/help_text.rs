pub(super) const ROOT_LONG_ABOUT: &str = "\
Activate, deactivate or check the maintenance mode of a site

A site is in maintenance mode while a .maintenance file exists in its root
directory and the timestamp recorded in that file is less than 10 minutes old.
The file contains a statement of the form:

  <?php $upgrading = 1700000000; ?>

Once the timestamp is older than 10 minutes the file is considered stale and the
site is no longer in maintenance mode, even though the file is still present.
A file whose timestamp cannot be read, or that cannot be read at all, is
treated as stale, and a warning is logged.

COMMANDS:

  activate
    Write a fresh .maintenance file. Fails if maintenance mode is already
    active, unless --force is given.

  deactivate
    Remove the .maintenance file. Fails if maintenance mode is not active.

  status
    Print whether maintenance mode is active.

  is-active
    Print nothing; exit 0 if maintenance mode is active and 1 otherwise.

GLOBAL OPTIONS:

  -C, --path <DIRECTORY>
    Root directory of the site. Defaults to the current directory.

EXAMPLES:

  # Activate maintenance mode
  $ maintenance-mode activate
  Enabling Maintenance mode...
  Success: Activated Maintenance mode.

  # Deactivate maintenance mode
  $ maintenance-mode deactivate
  Disabling Maintenance mode...
  Success: Deactivated Maintenance mode.

  # Display maintenance mode status
  $ maintenance-mode -C /var/www/site status
  Maintenance mode is active.

  # Get maintenance mode status for scripting purposes
  $ maintenance-mode is-active
  $ echo $?
  1
";

pub(super) const ACTIVATE_LONG_ABOUT: &str = "\
Activate maintenance mode

Writes .maintenance into the site root with the current time as its timestamp.
If maintenance mode is already active the command fails without touching the
file. Use --force to rewrite the file anyway, which also restarts the 10 minute
window.

A .maintenance file that exists but is stale does not count as active; activate
simply overwrites it.

EXIT CODES:

  0: Maintenance mode was activated
  1: Maintenance mode was already active (without --force), or an error occurred

EXAMPLES:

  $ maintenance-mode activate
  Enabling Maintenance mode...
  Success: Activated Maintenance mode.

  # Extend an ongoing maintenance window
  $ maintenance-mode activate --force
  Enabling Maintenance mode...
  Success: Activated Maintenance mode.
";

pub(super) const DEACTIVATE_LONG_ABOUT: &str = "\
Deactivate maintenance mode

Removes .maintenance from the site root. If maintenance mode is not active the
command fails and leaves any stale .maintenance file in place.

EXIT CODES:

  0: Maintenance mode was deactivated
  1: Maintenance mode was not active, or an error occurred

EXAMPLES:

  $ maintenance-mode deactivate
  Disabling Maintenance mode...
  Success: Deactivated Maintenance mode.
";

pub(super) const STATUS_LONG_ABOUT: &str = "\
Display maintenance mode status

Prints a single line to stdout. Never changes any files.

EXAMPLES:

  $ maintenance-mode status
  Maintenance mode is active.

  $ maintenance-mode status
  Maintenance mode is not active.
";

pub(super) const IS_ACTIVE_LONG_ABOUT: &str = "\
Detect maintenance mode status for scripting

Prints nothing. The exit code carries the answer: 0 means maintenance mode is
active and 1 means it is not. Other errors also exit with 1.

EXAMPLES:

  $ maintenance-mode is-active
  $ echo $?
  1

  # Skip a deploy step while the site is in maintenance
  if maintenance-mode -C /var/www/site is-active; then
    echo \"site is in maintenance, skipping\"
  fi
";
