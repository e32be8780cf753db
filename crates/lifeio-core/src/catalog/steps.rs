//! The `touch newfile.txt` narrative, step by step.

use crate::models::{
    FileMetadata, MetadataChange, MetadataField::*, MetadataValue::*, StepRecord,
};

/// Metadata before the file exists.
pub const INITIAL_METADATA: FileMetadata = FileMetadata {
    inode_number: 0,
    permissions: "N/A",
    owner: "N/A",
    size: 0,
    access_time: "Not created yet",
    modify_time: "Not created yet",
    change_time: "Not created yet",
};

/// Metadata once the file has been created.
pub const FINAL_METADATA: FileMetadata = FileMetadata {
    inode_number: 12345,
    permissions: "rw-rw-r--",
    owner: "user",
    size: 0,
    access_time: "Current time",
    modify_time: "Current time",
    change_time: "Current time",
};

pub(super) static STEPS: [StepRecord; 8] = [
    StepRecord {
        id: 0,
        title: "Shell Processing",
        description: "User executes the touch command in terminal",
        color: "#3498db",
        duration_ms: 3000,
        details: &[
            "User types: touch newfile.txt in terminal",
            "Shell parses the command and arguments",
            "Shell forks a new process to execute touch",
            "Exec system call loads the touch binary",
        ],
        code_example: Some(
            "// Shell command execution
$ touch newfile.txt

// Shell processing steps:
1. Parse command line
2. Locate touch executable
3. Fork new process
4. Execute /bin/touch",
        ),
        metadata_changes: &[],
    },
    StepRecord {
        id: 1,
        title: "System Call Interface",
        description: "Touch command makes system calls to kernel",
        color: "#e67e22",
        duration_ms: 4000,
        details: &[
            "open() system call with O_CREAT flag",
            "O_WRONLY for write-only access",
            "O_TRUNC to truncate to zero length",
            "0666 default permissions",
            "Returns file descriptor on success",
        ],
        code_example: Some(
            "// System call made by touch
int fd = open(\"newfile.txt\", 
              O_CREAT | O_WRONLY | O_TRUNC, 
              0666);

// If file doesn't exist, it's created
// If file exists, it's truncated to 0 bytes",
        ),
        metadata_changes: &[
            MetadataChange::new(Permissions, Text("N/A"), Text("rw-rw-r--")),
            MetadataChange::new(Size, Text("N/A"), Integer(0)),
        ],
    },
    StepRecord {
        id: 2,
        title: "VFS Layer",
        description: "Virtual File System processes the request",
        color: "#2ecc71",
        duration_ms: 5000,
        details: &[
            "VFS receives the open() system call",
            "Checks directory cache for file existence",
            "File not found - delegates to file system",
            "Calls file system's create() method",
        ],
        code_example: Some(
            "// VFS operations
struct file *filp;
filp = do_filp_open(AT_FDCWD, \"newfile.txt\", 
                    O_CREAT | O_WRONLY | O_TRUNC, 
                    0666);

// VFS handles path resolution
// and delegates to appropriate file system",
        ),
        metadata_changes: &[],
    },
    StepRecord {
        id: 3,
        title: "File System Layer",
        description: "File system creates inode and directory entry",
        color: "#9b59b6",
        duration_ms: 6000,
        details: &[
            "Allocates new inode for the file",
            "Sets initial metadata (permissions, timestamps)",
            "Creates directory entry linking filename to inode",
            "Updates parent directory metadata",
            "Uses journaling for consistency (ext4)",
        ],
        code_example: Some(
            "// Ext4 file creation
struct inode *inode;
inode = ext4_new_inode_start_handle(...);

// Initialize inode metadata
inode->i_mode = S_IFREG | 0666;
inode->i_size = 0;
inode->i_mtime = inode->i_atime = inode->i_ctime = current_time;

// Add directory entry
ext4_add_entry(dir_inode, \"newfile.txt\", inode);",
        ),
        metadata_changes: &[
            MetadataChange::new(InodeNumber, Text("N/A"), Integer(12345)),
            MetadataChange::new(ModifyTime, Text("N/A"), Text("Current time")),
            MetadataChange::new(AccessTime, Text("N/A"), Text("Current time")),
            MetadataChange::new(ChangeTime, Text("N/A"), Text("Current time")),
        ],
    },
    StepRecord {
        id: 4,
        title: "Block Layer",
        description: "Block allocation and buffering operations",
        color: "#f1c40f",
        duration_ms: 4000,
        details: &[
            "Block allocator assigns physical blocks",
            "Data is buffered in page cache",
            "I/O scheduler optimizes disk operations",
            "Dirty blocks queued for writeback",
        ],
        code_example: Some(
            "// Block allocation
sector_t block;
block = ext4_new_meta_blocks(inode, ...);

// Page cache operations
struct page *page;
page = grab_cache_page(inode->i_mapping, 0);

// I/O scheduling
submit_bio(REQ_OP_WRITE, bio);",
        ),
        metadata_changes: &[],
    },
    StepRecord {
        id: 5,
        title: "Device Driver",
        description: "Hardware communication with storage device",
        color: "#e74c3c",
        duration_ms: 3000,
        details: &[
            "Device driver receives block I/O requests",
            "Translates logical to physical addresses",
            "Communicates with storage hardware",
            "Handles hardware-specific protocols",
        ],
        code_example: Some(
            "// Device driver operations
static int ext4_submit_bio(struct bio *bio) {
    bio->bi_end_io = ext4_end_bio;
    submit_bio(bio);
    return 0;
}

// Hardware communication
sd_init_command(cmd);
scsi_execute(cmd, ...);",
        ),
        metadata_changes: &[],
    },
    // No metadata change here even though the inode reaches the disk; the
    // final-step overlay supplies the completed values.
    StepRecord {
        id: 6,
        title: "Physical Storage",
        description: "Data written to actual disk sectors",
        color: "#e74c3c",
        duration_ms: 5000,
        details: &[
            "Inode written to inode table block",
            "Directory entry written to directory block",
            "File data block allocated (empty)",
            "Metadata updated in superblock",
        ],
        code_example: Some(
            "// Physical storage layout
Superblock: Filesystem metadata
Inode Table: Inode 12345 (newfile.txt)
  - File type: Regular file
  - Permissions: 0666
  - Size: 0 bytes
Directory Block: \"newfile.txt\" → inode 12345
Data Blocks: Empty (0 bytes)",
        ),
        metadata_changes: &[],
    },
    StepRecord {
        id: 7,
        title: "Completion",
        description: "File creation process completes successfully",
        color: "#2ecc71",
        duration_ms: 3000,
        details: &[
            "Device driver signals I/O completion",
            "VFS updates cache with new file info",
            "Kernel returns file descriptor to process",
            "Touch command closes file descriptor",
            "File appears in directory listing",
        ],
        code_example: Some(
            "// Completion steps
fd = get_unused_fd_flags(O_WRONLY);
fd_install(fd, filp);

// Touch closes the file
close(fd);

// File is now accessible
ls -l newfile.txt",
        ),
        metadata_changes: &[],
    },
];
