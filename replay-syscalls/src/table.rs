/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The declarations of every syscall the replay engine knows about.
//!
//! Each line reads `name => Kind { x86: N, x64: M, argK: Shape }`. A missing
//! architecture means the syscall does not exist there. Argument shapes name
//! the structure an output argument points to, so that the recorder can copy
//! it without call-specific code; only regular (`Emulated`/`Executed`)
//! syscalls can have them.

use crate::shape::ArgShape::*;

syscall_table! {
    /// Every syscall declaration, in declaration order.
    pub static DECLARATIONS = [
        // Calls shared by both ABIs, in x86 numbering order. Legacy x86-only
        // calls are interleaved where they fall.
        exit => IrregularMayExecute { x86: 1, x64: 60 },
        fork => Emulated { x86: 2, x64: 57 },
        read => IrregularEmulated { x86: 3, x64: 0 },
        write => IrregularEmulated { x86: 4, x64: 1 },
        open => Emulated { x86: 5, x64: 2 },
        close => Emulated { x86: 6, x64: 3 },
        waitpid => IrregularEmulated { x86: 7 },
        creat => Emulated { x86: 8, x64: 85 },
        link => Emulated { x86: 9, x64: 86 },
        unlink => Emulated { x86: 10, x64: 87 },
        execve => IrregularMayExecute { x86: 11, x64: 59 },
        chdir => Emulated { x86: 12, x64: 80 },
        time => Emulated { x86: 13, x64: 201, arg1: TimeT },
        mknod => Unsupported { x86: 14, x64: 133 },
        chmod => Emulated { x86: 15, x64: 90 },
        lchown => Emulated { x86: 16, x64: 94 },
        _break => Invalid { x86: 17 },
        oldstat => Unsupported { x86: 18 },
        lseek => Emulated { x86: 19, x64: 8 },
        getpid => Emulated { x86: 20, x64: 39 },
        mount => Unsupported { x86: 21, x64: 165 },
        umount => Unsupported { x86: 22 },
        setuid => Unsupported { x86: 23, x64: 105 },
        getuid => Emulated { x86: 24, x64: 102 },
        stime => Unsupported { x86: 25 },
        ptrace => IrregularEmulated { x86: 26, x64: 101 },
        alarm => Emulated { x86: 27, x64: 37 },
        oldfstat => Unsupported { x86: 28 },
        pause => IrregularEmulated { x86: 29, x64: 34 },
        utime => Emulated { x86: 30, x64: 132 },
        stty => Invalid { x86: 31 },
        gtty => Invalid { x86: 32 },
        access => Emulated { x86: 33, x64: 21 },
        nice => Unsupported { x86: 34 },
        ftime => Invalid { x86: 35 },
        sync => Unsupported { x86: 36, x64: 162 },
        kill => Emulated { x86: 37, x64: 62 },
        rename => Emulated { x86: 38, x64: 82 },
        mkdir => Emulated { x86: 39, x64: 83 },
        rmdir => Emulated { x86: 40, x64: 84 },
        dup => Emulated { x86: 41, x64: 32 },
        pipe => Emulated { x86: 42, x64: 22, arg1: IntPair },
        times => Emulated { x86: 43, x64: 100, arg1: Tms },
        prof => Invalid { x86: 44 },
        brk => Executed { x86: 45, x64: 12 },
        setgid => Unsupported { x86: 46, x64: 106 },
        getgid => Emulated { x86: 47, x64: 104 },
        signal => Unsupported { x86: 48 },
        geteuid => Emulated { x86: 49, x64: 107 },
        getegid => Emulated { x86: 50, x64: 108 },
        acct => Unsupported { x86: 51, x64: 163 },
        umount2 => Unsupported { x86: 52, x64: 166 },
        lock => Invalid { x86: 53 },
        ioctl => IrregularEmulated { x86: 54, x64: 16 },
        fcntl => IrregularEmulated { x86: 55, x64: 72 },
        mpx => Invalid { x86: 56 },
        setpgid => Emulated { x86: 57, x64: 109 },
        ulimit => Invalid { x86: 58 },
        oldolduname => Unsupported { x86: 59 },
        umask => Emulated { x86: 60, x64: 95 },
        chroot => Unsupported { x86: 61, x64: 161 },
        ustat => Unsupported { x86: 62, x64: 136 },
        dup2 => Emulated { x86: 63, x64: 33 },
        getppid => Emulated { x86: 64, x64: 110 },
        getpgrp => Emulated { x86: 65, x64: 111 },
        setsid => Emulated { x86: 66, x64: 112 },
        sigaction => Emulated { x86: 67, arg3: KernelSigaction },
        sgetmask => Unsupported { x86: 68 },
        ssetmask => Unsupported { x86: 69 },
        setreuid => Unsupported { x86: 70, x64: 113 },
        setregid => Unsupported { x86: 71, x64: 114 },
        sigsuspend => IrregularEmulated { x86: 72 },
        sigpending => Unsupported { x86: 73 },
        sethostname => Unsupported { x86: 74, x64: 170 },
        setrlimit => Executed { x86: 75, x64: 160, arg2: Rlimit },
        getrlimit => Emulated { x64: 97, arg2: Rlimit },
        getrusage => Emulated { x86: 77, x64: 98, arg2: Rusage },
        gettimeofday => Emulated { x86: 78, x64: 96, arg1: Timeval, arg2: Timezone },
        settimeofday => Unsupported { x86: 79, x64: 164 },
        getgroups => IrregularEmulated { x86: 80, x64: 115 },
        setgroups => Unsupported { x86: 81, x64: 116 },
        select => IrregularEmulated { x86: 82, x64: 23 },
        symlink => Emulated { x86: 83, x64: 88 },
        oldlstat => Unsupported { x86: 84 },
        readlink => IrregularEmulated { x86: 85, x64: 89 },
        uselib => Unsupported { x86: 86, x64: 134 },
        swapon => Unsupported { x86: 87, x64: 167 },
        reboot => Unsupported { x86: 88, x64: 169 },
        readdir => Unsupported { x86: 89 },
        mmap => IrregularMayExecute { x86: 90, x64: 9 },
        munmap => Executed { x86: 91, x64: 11 },
        truncate => Emulated { x86: 92, x64: 76 },
        ftruncate => Emulated { x86: 93, x64: 77 },
        fchmod => Emulated { x86: 94, x64: 91 },
        fchown => Emulated { x86: 95, x64: 93 },
        getpriority => Emulated { x86: 96, x64: 140 },
        setpriority => IrregularEmulated { x86: 97, x64: 141 },
        profil => Invalid { x86: 98 },
        statfs => Emulated { x86: 99, x64: 137, arg2: Statfs },
        fstatfs => Emulated { x86: 100, x64: 138, arg2: Statfs },
        ioperm => Unsupported { x86: 101, x64: 173 },
        socketcall => IrregularEmulated { x86: 102 },
        syslog => Unsupported { x86: 103, x64: 103 },
        setitimer => Emulated { x86: 104, x64: 38, arg3: Itimerval },
        getitimer => Emulated { x86: 105, x64: 36, arg2: Itimerval },
        stat => Emulated { x86: 106, x64: 4, arg2: Stat },
        lstat => Emulated { x86: 107, x64: 6, arg2: Stat },
        fstat => Emulated { x86: 108, x64: 5, arg2: Stat },
        olduname => Unsupported { x86: 109 },
        iopl => Unsupported { x86: 110, x64: 172 },
        vhangup => Unsupported { x86: 111, x64: 153 },
        idle => Unsupported { x86: 112 },
        vm86old => Unsupported { x86: 113 },
        wait4 => IrregularEmulated { x86: 114, x64: 61 },
        swapoff => Unsupported { x86: 115, x64: 168 },
        sysinfo => Emulated { x86: 116, x64: 99, arg1: Sysinfo },
        ipc => IrregularEmulated { x86: 117 },
        fsync => Emulated { x86: 118, x64: 74 },
        sigreturn => Emulated { x86: 119 },
        clone => IrregularMayExecute { x86: 120, x64: 56 },
        setdomainname => Unsupported { x86: 121, x64: 171 },
        uname => Emulated { x86: 122, x64: 63, arg1: Utsname },
        modify_ldt => Unsupported { x86: 123, x64: 154 },
        adjtimex => Unsupported { x86: 124, x64: 159 },
        mprotect => Executed { x86: 125, x64: 10 },
        sigprocmask => Emulated { x86: 126, arg3: SigsetT },
        create_module => Unsupported { x86: 127, x64: 174 },
        init_module => Unsupported { x86: 128, x64: 175 },
        delete_module => Unsupported { x86: 129, x64: 176 },
        get_kernel_syms => Unsupported { x86: 130, x64: 177 },
        quotactl => IrregularEmulated { x86: 131, x64: 179 },
        getpgid => Emulated { x86: 132, x64: 121 },
        fchdir => Emulated { x86: 133, x64: 81 },
        bdflush => Unsupported { x86: 134 },
        sysfs => Unsupported { x86: 135, x64: 139 },
        personality => Unsupported { x86: 136, x64: 135 },
        afs_syscall => Invalid { x86: 137, x64: 183 },
        setfsuid => Unsupported { x86: 138, x64: 122 },
        setfsgid => Unsupported { x86: 139, x64: 123 },
        _llseek => Emulated { x86: 140, arg4: KernelLoffT },
        getdents => IrregularEmulated { x86: 141, x64: 78 },
        _newselect => IrregularEmulated { x86: 142 },
        flock => Unsupported { x86: 143, x64: 73 },
        msync => Emulated { x86: 144, x64: 26 },
        readv => IrregularEmulated { x86: 145, x64: 19 },
        writev => IrregularEmulated { x86: 146, x64: 20 },
        getsid => Emulated { x86: 147, x64: 124 },
        fdatasync => Emulated { x86: 148, x64: 75 },
        _sysctl => IrregularEmulated { x86: 149, x64: 156 },
        mlock => Unsupported { x86: 150, x64: 149 },
        munlock => Unsupported { x86: 151, x64: 150 },
        mlockall => Unsupported { x86: 152, x64: 151 },
        munlockall => Unsupported { x86: 153, x64: 152 },
        sched_setparam => Unsupported { x86: 154, x64: 142 },
        sched_getparam => Emulated { x86: 155, x64: 143, arg2: SchedParam },
        sched_setscheduler => Emulated { x86: 156, x64: 144 },
        sched_getscheduler => Emulated { x86: 157, x64: 145 },
        sched_yield => IrregularEmulated { x86: 158, x64: 24 },
        sched_get_priority_max => Emulated { x86: 159, x64: 146 },
        sched_get_priority_min => Emulated { x86: 160, x64: 147 },
        sched_rr_get_interval => Unsupported { x86: 161, x64: 148 },
        nanosleep => IrregularEmulated { x86: 162, x64: 35 },
        mremap => Executed { x86: 163, x64: 25 },
        setresuid => Emulated { x86: 164, x64: 117 },
        getresuid => Emulated { x86: 165, x64: 118, arg1: LegacyUidT, arg2: LegacyUidT, arg3: LegacyUidT },
        vm86 => Unsupported { x86: 166 },
        query_module => Unsupported { x86: 167, x64: 178 },
        poll => IrregularEmulated { x86: 168, x64: 7 },
        nfsservctl => Unsupported { x86: 169, x64: 180 },
        setresgid => Emulated { x86: 170, x64: 119 },
        getresgid => Emulated { x86: 171, x64: 120, arg1: LegacyGidT, arg2: LegacyGidT, arg3: LegacyGidT },
        prctl => IrregularMayExecute { x86: 172, x64: 157 },
        rt_sigreturn => Emulated { x86: 173, x64: 15 },
        rt_sigaction => Emulated { x86: 174, x64: 13, arg3: KernelSigaction },
        rt_sigprocmask => Emulated { x86: 175, x64: 14, arg3: SigsetT },
        rt_sigpending => IrregularEmulated { x86: 176, x64: 127 },
        rt_sigtimedwait => IrregularEmulated { x86: 177, x64: 128 },
        rt_sigsuspend => IrregularEmulated { x86: 179, x64: 130 },
        pread64 => IrregularEmulated { x86: 180, x64: 17 },
        pwrite64 => Emulated { x86: 181, x64: 18 },
        chown => Emulated { x86: 182, x64: 92 },
        getcwd => IrregularEmulated { x86: 183, x64: 79 },
        capget => Unsupported { x86: 184, x64: 125 },
        capset => Unsupported { x86: 185, x64: 126 },
        sigaltstack => Emulated { x86: 186, x64: 131, arg2: StackT },
        sendfile => IrregularEmulated { x86: 187, x64: 40 },
        getpmsg => Invalid { x86: 188, x64: 181 },
        putpmsg => Invalid { x86: 189, x64: 182 },
        vfork => IrregularEmulated { x86: 190, x64: 58 },
        ugetrlimit => Emulated { x86: 191, arg2: Rlimit },
        mmap2 => IrregularMayExecute { x86: 192 },
        truncate64 => Emulated { x86: 193 },
        ftruncate64 => Emulated { x86: 194 },
        stat64 => Emulated { x86: 195, arg2: Stat64 },
        lstat64 => Emulated { x86: 196, arg2: Stat64 },
        fstat64 => Emulated { x86: 197, arg2: Stat64 },
        lchown32 => Emulated { x86: 198 },
        getuid32 => Emulated { x86: 199 },
        getgid32 => Emulated { x86: 200 },
        geteuid32 => Emulated { x86: 201 },
        getegid32 => Emulated { x86: 202 },
        setreuid32 => Unsupported { x86: 203 },
        setregid32 => Emulated { x86: 204 },
        getgroups32 => IrregularEmulated { x86: 205 },
        setgroups32 => Unsupported { x86: 206 },
        fchown32 => Emulated { x86: 207 },
        setresuid32 => Emulated { x86: 208 },
        getresuid32 => Emulated { x86: 209, arg1: UidT, arg2: UidT, arg3: UidT },
        setresgid32 => Emulated { x86: 210 },
        getresgid32 => Emulated { x86: 211, arg1: GidT, arg2: GidT, arg3: GidT },
        chown32 => Emulated { x86: 212 },
        setuid32 => Unsupported { x86: 213 },
        setgid32 => Unsupported { x86: 214 },
        setfsuid32 => Unsupported { x86: 215 },
        setfsgid32 => Unsupported { x86: 216 },
        pivot_root => Unsupported { x86: 217, x64: 155 },
        mincore => IrregularEmulated { x86: 218, x64: 27 },
        madvise => Executed { x86: 219, x64: 28 },
        getdents64 => IrregularEmulated { x86: 220, x64: 217 },
        fcntl64 => IrregularEmulated { x86: 221 },
        gettid => Emulated { x86: 224, x64: 186 },
        readahead => Emulated { x86: 225, x64: 187 },
        setxattr => Emulated { x86: 226, x64: 188 },
        lsetxattr => Emulated { x86: 227, x64: 189 },
        fsetxattr => Emulated { x86: 228, x64: 190 },
        getxattr => IrregularEmulated { x86: 229, x64: 191 },
        lgetxattr => IrregularEmulated { x86: 230, x64: 192 },
        fgetxattr => IrregularEmulated { x86: 231, x64: 193 },
        listxattr => Unsupported { x86: 232, x64: 194 },
        llistxattr => Unsupported { x86: 233, x64: 195 },
        flistxattr => Unsupported { x86: 234, x64: 196 },
        removexattr => Unsupported { x86: 235, x64: 197 },
        lremovexattr => Unsupported { x86: 236, x64: 198 },
        fremovexattr => Unsupported { x86: 237, x64: 199 },
        tkill => Unsupported { x86: 238, x64: 200 },
        sendfile64 => IrregularEmulated { x86: 239 },
        futex => IrregularEmulated { x86: 240, x64: 202 },
        sched_setaffinity => IrregularEmulated { x86: 241, x64: 203 },
        sched_getaffinity => Emulated { x86: 242, x64: 204, arg3: CpuSetT },
        set_thread_area => Executed { x86: 243, x64: 205, arg1: UserDesc },
        get_thread_area => Unsupported { x86: 244, x64: 211 },
        io_setup => Unsupported { x86: 245, x64: 206 },
        io_destroy => Unsupported { x86: 246, x64: 207 },
        io_getevents => Unsupported { x86: 247, x64: 208 },
        io_submit => Unsupported { x86: 248, x64: 209 },
        io_cancel => Unsupported { x86: 249, x64: 210 },
        fadvise64 => Emulated { x86: 250, x64: 221 },
        exit_group => IrregularMayExecute { x86: 252, x64: 231 },
        lookup_dcookie => Unsupported { x86: 253, x64: 212 },
        epoll_create => Emulated { x86: 254, x64: 213 },
        epoll_ctl => Emulated { x86: 255, x64: 233 },
        epoll_wait => IrregularEmulated { x86: 256, x64: 232 },
        remap_file_pages => Unsupported { x86: 257, x64: 216 },
        set_tid_address => Executed { x86: 258, x64: 218, arg1: PidT },
        timer_create => Unsupported { x86: 259, x64: 222 },
        timer_settime => Unsupported { x86: 260, x64: 223 },
        timer_gettime => Unsupported { x86: 261, x64: 224 },
        timer_getoverrun => Unsupported { x86: 262, x64: 225 },
        timer_delete => Unsupported { x86: 263, x64: 226 },
        clock_settime => Unsupported { x86: 264, x64: 227 },
        clock_gettime => Emulated { x86: 265, x64: 228, arg2: Timespec },
        clock_getres => Emulated { x86: 266, x64: 229, arg2: Timespec },
        clock_nanosleep => Unsupported { x86: 267, x64: 230 },
        statfs64 => Emulated { x86: 268, arg3: Statfs64 },
        fstatfs64 => Emulated { x86: 269, arg3: Statfs64 },
        tgkill => Emulated { x86: 270, x64: 234 },
        utimes => Emulated { x86: 271, x64: 235 },
        fadvise64_64 => Emulated { x86: 272 },
        vserver => Invalid { x86: 273, x64: 236 },
        mbind => Emulated { x86: 274, x64: 237 },
        get_mempolicy => Unsupported { x86: 275, x64: 239 },
        set_mempolicy => Unsupported { x86: 276, x64: 238 },
        mq_open => Unsupported { x86: 277, x64: 240 },
        mq_unlink => Unsupported { x86: 278, x64: 241 },
        mq_timedsend => Unsupported { x86: 279, x64: 242 },
        mq_timedreceive => Unsupported { x86: 280, x64: 243 },
        mq_notify => Unsupported { x86: 281, x64: 244 },
        mq_getsetattr => Unsupported { x86: 282, x64: 245 },
        kexec_load => Unsupported { x86: 283, x64: 246 },
        waitid => IrregularEmulated { x86: 284, x64: 247 },
        add_key => Unsupported { x86: 286, x64: 248 },
        request_key => Unsupported { x86: 287, x64: 249 },
        keyctl => Unsupported { x86: 288, x64: 250 },
        ioprio_set => Unsupported { x86: 289, x64: 251 },
        ioprio_get => Unsupported { x86: 290, x64: 252 },
        inotify_init => Emulated { x86: 291, x64: 253 },
        inotify_add_watch => Emulated { x86: 292, x64: 254 },
        inotify_rm_watch => Emulated { x86: 293, x64: 255 },
        migrate_pages => Unsupported { x86: 294, x64: 256 },
        openat => Emulated { x86: 295, x64: 257 },
        mkdirat => Emulated { x86: 296, x64: 258 },
        mknodat => Unsupported { x86: 297, x64: 259 },
        fchownat => Unsupported { x86: 298, x64: 260 },
        futimesat => Unsupported { x86: 299, x64: 261 },
        fstatat64 => Emulated { x86: 300, x64: 262, arg3: Stat64 },
        unlinkat => Emulated { x86: 301, x64: 263 },
        renameat => Unsupported { x86: 302, x64: 264 },
        linkat => Unsupported { x86: 303, x64: 265 },
        symlinkat => Unsupported { x86: 304, x64: 266 },
        readlinkat => Unsupported { x86: 305, x64: 267 },
        fchmodat => Unsupported { x86: 306, x64: 268 },
        faccessat => Emulated { x86: 307, x64: 269 },
        pselect6 => Unsupported { x86: 308, x64: 270 },
        ppoll => IrregularEmulated { x86: 309, x64: 271 },
        unshare => Unsupported { x86: 310, x64: 272 },
        set_robust_list => Executed { x86: 311, x64: 273 },
        get_robust_list => Unsupported { x86: 312, x64: 274 },
        splice => IrregularEmulated { x86: 313, x64: 275 },
        sync_file_range => Unsupported { x86: 314, x64: 277 },
        tee => Unsupported { x86: 315, x64: 276 },
        vmsplice => Unsupported { x86: 316, x64: 278 },
        move_pages => Unsupported { x86: 317, x64: 279 },
        getcpu => Unsupported { x86: 318, x64: 309 },
        epoll_pwait => Unsupported { x86: 319, x64: 281 },
        utimensat => Emulated { x86: 320, x64: 280 },
        signalfd => Emulated { x86: 321, x64: 282 },
        timerfd_create => Emulated { x86: 322, x64: 283 },
        eventfd => Unsupported { x86: 323, x64: 284 },
        fallocate => Emulated { x86: 324, x64: 285 },
        timerfd_settime => Emulated { x86: 325, x64: 286, arg4: Itimerspec },
        timerfd_gettime => Emulated { x86: 326, x64: 287, arg2: Itimerspec },
        signalfd4 => Emulated { x86: 327, x64: 289 },
        eventfd2 => Emulated { x86: 328, x64: 290 },
        epoll_create1 => Emulated { x86: 329, x64: 291 },
        dup3 => Emulated { x86: 330, x64: 292 },
        pipe2 => Emulated { x86: 331, x64: 293, arg1: IntPair },
        inotify_init1 => Emulated { x86: 332, x64: 294 },
        preadv => IrregularEmulated { x86: 333, x64: 295 },
        pwritev => Emulated { x86: 334, x64: 296 },
        rt_sigqueueinfo => Emulated { x86: 178, x64: 129 },
        rt_tgsigqueueinfo => Emulated { x86: 335, x64: 297 },
        perf_event_open => Emulated { x86: 336, x64: 298 },
        recvmmsg => IrregularEmulated { x86: 337, x64: 299 },
        fanotify_init => Unsupported { x86: 338, x64: 300 },
        fanotify_mark => Unsupported { x86: 339, x64: 301 },
        prlimit64 => Executed { x86: 340, x64: 302, arg4: Rlimit64 },
        name_to_handle_at => Unsupported { x86: 341, x64: 303 },
        open_by_handle_at => Unsupported { x86: 342, x64: 304 },
        clock_adjtime => Unsupported { x86: 343, x64: 305 },
        syncfs => Unsupported { x86: 344, x64: 306 },
        sendmmsg => IrregularEmulated { x86: 345, x64: 307 },
        setns => Unsupported { x86: 346, x64: 308 },
        process_vm_readv => Unsupported { x86: 347, x64: 310 },
        process_vm_writev => Unsupported { x86: 348, x64: 311 },
        kcmp => Unsupported { x86: 349, x64: 312 },
        finit_module => Unsupported { x86: 350, x64: 313 },
        sched_setattr => Unsupported { x86: 351, x64: 314 },
        sched_getattr => Unsupported { x86: 352, x64: 315 },
        renameat2 => Unsupported { x86: 353, x64: 316 },
        seccomp => Unsupported { x86: 354, x64: 317 },
        getrandom => IrregularEmulated { x86: 355, x64: 318 },

        // Resumes a call interrupted by a signal.
        restart_syscall => Restart { x86: 0, x64: 219 },

        // Private calls made by the engine's preload library. They use numbers
        // no kernel assigns.
        rrcall_init_preload => IrregularEmulated { x86: 442, x64: 442 },
        rrcall_init_buffers => IrregularEmulated { x86: 443, x64: 443 },
        rrcall_notify_syscall_hook_exit => IrregularEmulated { x86: 444, x64: 444 },

        // Socket calls. On x86 these go through `socketcall`.
        socket => Emulated { x64: 41 },
        connect => Emulated { x64: 42 },
        accept => IrregularEmulated { x64: 43 },
        sendto => Emulated { x64: 44 },
        recvfrom => IrregularEmulated { x64: 45 },
        sendmsg => IrregularEmulated { x64: 46 },
        recvmsg => IrregularEmulated { x64: 47 },
        shutdown => Emulated { x64: 48 },
        bind => Emulated { x64: 49 },
        listen => Emulated { x64: 50 },
        getsockname => IrregularEmulated { x64: 51 },
        getpeername => IrregularEmulated { x64: 52 },
        socketpair => Emulated { x64: 53, arg4: IntPair },
        setsockopt => Emulated { x64: 54 },
        getsockopt => IrregularEmulated { x64: 55 },
        accept4 => IrregularEmulated { x64: 288 },

        // SysV IPC. On x86 these go through `ipc`.
        shmget => Emulated { x64: 29 },
        shmat => IrregularEmulated { x64: 30 },
        shmctl => IrregularEmulated { x64: 31 },
        semget => Emulated { x64: 64 },
        semop => IrregularEmulated { x64: 65 },
        semctl => IrregularEmulated { x64: 66 },
        shmdt => IrregularEmulated { x64: 67 },
        msgget => Emulated { x64: 68 },
        msgsnd => IrregularEmulated { x64: 69 },
        msgrcv => IrregularEmulated { x64: 70 },
        msgctl => IrregularEmulated { x64: 71 },
        semtimedop => IrregularEmulated { x64: 220 },

        // x64-only leftovers.
        arch_prctl => Executed { x64: 158 },
        tuxcall => Invalid { x64: 184 },
        security => Invalid { x64: 185 },
        epoll_ctl_old => Unsupported { x64: 214 },
        epoll_wait_old => Unsupported { x64: 215 },
    ];
}
