//! Python reference listings shown in the details pane's code view.

pub const BINARY_SEARCH_TREE: &str = r##"class Node:
    def __init__(self, value):
        self.value = value
        self.left = None
        self.right = None

class BinarySearchTree:
    def __init__(self):
        self.root = None
    
    def insert(self, value):
        new_node = Node(value)
        
        if self.root is None:
            self.root = new_node
            return self
        
        current = self.root
        while True:
            if value == current.value:
                return None  # Duplicate value
            
            if value < current.value:
                if current.left is None:
                    current.left = new_node
                    return self
                current = current.left
            else:
                if current.right is None:
                    current.right = new_node
                    return self
                current = current.right
    
    def find(self, value):
        if self.root is None:
            return False
        
        current = self.root
        while current:
            if value == current.value:
                return True
            
            if value < current.value:
                current = current.left
            else:
                current = current.right
        
        return False
    
    def remove(self, value):
        self.root = self._remove_node(self.root, value)
        
    def _remove_node(self, root, value):
        # Base case
        if root is None:
            return None
            
        # Recursive search for the node to remove
        if value < root.value:
            root.left = self._remove_node(root.left, value)
        elif value > root.value:
            root.right = self._remove_node(root.right, value)
        else:
            # Node with only one child or no child
            if root.left is None:
                return root.right
            elif root.right is None:
                return root.left
                
            # Node with two children
            # Get the inorder successor (smallest in the right subtree)
            root.value = self._min_value(root.right)
            
            # Delete the inorder successor
            root.right = self._remove_node(root.right, root.value)
            
        return root
        
    def _min_value(self, node):
        current = node
        while current.left is not None:
            current = current.left
        return current.value"##;

pub const GRAPH_DFS: &str = r##"def dfs_recursive(graph, start, visited=None):
    if visited is None:
        visited = set()
    
    # Mark the current node as visited
    visited.add(start)
    print(start, end=' ')  # Process the current node
    
    # Recur for all adjacent vertices
    for neighbor in graph[start]:
        if neighbor not in visited:
            dfs_recursive(graph, neighbor, visited)
    
    return visited

def dfs_iterative(graph, start):
    visited = set()
    stack = [start]
    
    while stack:
        vertex = stack.pop()
        
        if vertex not in visited:
            print(vertex, end=' ')  # Process the current node
            visited.add(vertex)
            
            # Add all unvisited neighbors to the stack
            for neighbor in graph[vertex]:
                if neighbor not in visited:
                    stack.append(neighbor)
    
    return visited

# Example usage
if __name__ == "__main__":
    # Example graph represented as an adjacency list
    graph = {
        'A': ['B', 'C', 'D'],
        'B': ['A', 'E', 'F'],
        'C': ['A', 'G'],
        'D': ['A', 'H'],
        'E': ['B'],
        'F': ['B'],
        'G': ['C'],
        'H': ['D']
    }
    
    print("DFS Recursive:")
    dfs_recursive(graph, 'A')
    
    print("\nDFS Iterative:")
    dfs_iterative(graph, 'A')"##;

pub const GRAPH_BFS: &str = r##"from collections import deque

def bfs(graph, start):
    # Keep track of visited vertices
    visited = set([start])
    
    # Queue for BFS
    queue = deque([start])
    
    # Result list to store the BFS traversal order
    result = []
    
    while queue:
        # Dequeue a vertex from the queue
        vertex = queue.popleft()
        result.append(vertex)
        
        # Get all adjacent vertices of the dequeued vertex
        # If an adjacent vertex has not been visited, mark it
        # visited and enqueue it
        for neighbor in graph[vertex]:
            if neighbor not in visited:
                visited.add(neighbor)
                queue.append(neighbor)
    
    return result

# Function to find shortest path using BFS
def shortest_path(graph, start, end):
    # Keep track of visited vertices
    visited = set([start])
    
    # Queue for BFS with path information
    queue = deque([(start, [start])])
    
    while queue:
        # Dequeue a vertex and its path from the queue
        vertex, path = queue.popleft()
        
        # If we've reached the end vertex, return the path
        if vertex == end:
            return path
        
        # Explore neighbors
        for neighbor in graph[vertex]:
            if neighbor not in visited:
                visited.add(neighbor)
                # Enqueue the neighbor with the updated path
                queue.append((neighbor, path + [neighbor]))
    
    # If no path is found
    return None

# Example usage
if __name__ == "__main__":
    # Example graph represented as an adjacency list
    graph = {
        'A': ['B', 'C', 'D'],
        'B': ['A', 'E', 'F'],
        'C': ['A', 'G'],
        'D': ['A', 'H'],
        'E': ['B'],
        'F': ['B'],
        'G': ['C'],
        'H': ['D']
    }
    
    print("BFS Traversal:")
    print(bfs(graph, 'A'))
    
    print("Shortest path from A to G:")
    print(shortest_path(graph, 'A', 'G'))"##;

pub const BINARY_SEARCH: &str = r##"def binary_search_iterative(arr, target):
    """
    Iterative implementation of binary search
    Returns the index of target in arr if found, otherwise -1
    """
    left, right = 0, len(arr) - 1
    
    while left <= right:
        # Calculate middle index (avoiding integer overflow)
        mid = left + (right - left) // 2
        
        # Check if target is present at mid
        if arr[mid] == target:
            return mid
        
        # If target is greater, ignore left half
        elif arr[mid] < target:
            left = mid + 1
        
        # If target is smaller, ignore right half
        else:
            right = mid - 1
    
    # Element is not present in array
    return -1

def binary_search_recursive(arr, target, left=None, right=None):
    """
    Recursive implementation of binary search
    Returns the index of target in arr if found, otherwise -1
    """
    # Initialize left and right for first call
    if left is None and right is None:
        left, right = 0, len(arr) - 1
    
    # Base case: element not found
    if left > right:
        return -1
    
    # Calculate middle index
    mid = left + (right - left) // 2
    
    # Check if target is present at mid
    if arr[mid] == target:
        return mid
    
    # If target is greater, search in right half
    elif arr[mid] < target:
        return binary_search_recursive(arr, target, mid + 1, right)
    
    # If target is smaller, search in left half
    else:
        return binary_search_recursive(arr, target, left, mid - 1)

# Example usage
if __name__ == "__main__":
    sorted_array = [5, 13, 19, 24, 29, 38, 45, 53, 67, 78, 91]
    target = 45
    
    # Iterative approach
    result_iterative = binary_search_iterative(sorted_array, target)
    if result_iterative != -1:
        print(f"Iterative: Element {target} found at index {result_iterative}")
    else:
        print(f"Iterative: Element {target} not found in the array")
    
    # Recursive approach
    result_recursive = binary_search_recursive(sorted_array, target)
    if result_recursive != -1:
        print(f"Recursive: Element {target} found at index {result_recursive}")
    else:
        print(f"Recursive: Element {target} not found in the array")"##;

pub const INSERTION_SORT: &str = r##"def insertion_sort(arr):
    """
    Sorts an array using the insertion sort algorithm
    """
    # Traverse through 1 to len(arr)
    for i in range(1, len(arr)):
        key = arr[i]
        
        # Move elements of arr[0..i-1], that are greater than key,
        # to one position ahead of their current position
        j = i - 1
        while j >= 0 and arr[j] > key:
            arr[j + 1] = arr[j]
            j -= 1
        
        arr[j + 1] = key
    
    return arr

# Example usage
if __name__ == "__main__":
    # Example array
    arr = [29, 10, 14, 37, 20, 25, 44, 15]
    
    print("Original array:", arr)
    sorted_arr = insertion_sort(arr.copy())
    print("Sorted array:", sorted_arr)
    
    # Step-by-step demonstration
    def insertion_sort_steps(arr):
        """
        Demonstrates insertion sort step by step
        """
        print("Initial array:", arr)
        
        for i in range(1, len(arr)):
            key = arr[i]
            j = i - 1
            
            print(f"\nStep {i}: Insert {key} into sorted portion {arr[:i]}")
            
            while j >= 0 and arr[j] > key:
                arr[j + 1] = arr[j]
                j -= 1
                print(f"  Shift: {arr}")
            
            arr[j + 1] = key
            print(f"  Insert: {arr}")
        
        print("\nFinal sorted array:", arr)
    
    # Demonstrate step by step
    insertion_sort_steps(arr.copy())"##;

pub const TOPOLOGICAL_SORT: &str = r##"def topological_sort_dfs(graph):
    """
    Performs topological sort on a directed acyclic graph using DFS
    Returns a list of vertices in topological order
    """
    # Keep track of visited vertices
    visited = set()
    
    # Stack to store the topological order
    stack = []
    
    # Helper function for DFS
    def dfs(vertex):
        # Mark the current vertex as visited
        visited.add(vertex)
        
        # Recur for all adjacent vertices
        for neighbor in graph.get(vertex, []):
            if neighbor not in visited:
                dfs(neighbor)
        
        # After all neighbors are processed, add current vertex to stack
        stack.append(vertex)
    
    # Visit all vertices
    for vertex in graph:
        if vertex not in visited:
            dfs(vertex)
    
    # Return reversed stack (topological order)
    return stack[::-1]

def topological_sort_kahn(graph):
    """
    Performs topological sort on a directed acyclic graph using Kahn's algorithm
    Returns a list of vertices in topological order
    """
    # Calculate in-degree for each vertex
    in_degree = {vertex: 0 for vertex in graph}
    for vertex in graph:
        for neighbor in graph[vertex]:
            in_degree[neighbor] = in_degree.get(neighbor, 0) + 1
    
    # Queue of vertices with no incoming edges
    queue = [vertex for vertex in in_degree if in_degree[vertex] == 0]
    
    # Result list
    result = []
    
    # Process vertices with no incoming edges
    while queue:
        vertex = queue.pop(0)
        result.append(vertex)
        
        # Reduce in-degree of neighbors
        for neighbor in graph.get(vertex, []):
            in_degree[neighbor] -= 1
            
            # If in-degree becomes 0, add to queue
            if in_degree[neighbor] == 0:
                queue.append(neighbor)
    
    # Check if there was a cycle
    if len(result) != len(graph):
        return None  # Graph has a cycle
    
    return result

# Example usage
if __name__ == "__main__":
    # Example graph represented as an adjacency list (course prerequisites)
    # Each key is a course, and its values are the courses that depend on it
    graph = {
        'A': ['C', 'E'],  # Math 101
        'B': ['D'],       # CS 101
        'C': ['F'],       # Physics 101
        'D': ['F'],       # CS 201
        'E': ['F'],       # Math 201
        'F': []           # CS 301
    }
    
    print("Topological Sort (DFS):")
    print(topological_sort_dfs(graph))
    
    print("Topological Sort (Kahn's algorithm):")
    print(topological_sort_kahn(graph))"##;

pub const KADANE: &str = r##"def kadanes_algorithm(arr):
    """
    Finds the maximum sum subarray using Kadane's algorithm
    Returns the maximum sum
    """
    if not arr:
        return 0
    
    # Initialize variables
    max_so_far = float('-inf')  # Global maximum
    max_ending_here = 0         # Maximum sum ending at current position
    
    for num in arr:
        # Either extend the existing subarray or start a new one
        max_ending_here = max(num, max_ending_here + num)
        
        # Update global maximum
        max_so_far = max(max_so_far, max_ending_here)
    
    return max_so_far

def kadanes_algorithm_with_indices(arr):
    """
    Finds the maximum sum subarray using Kadane's algorithm
    Returns the maximum sum and the start and end indices of the subarray
    """
    if not arr:
        return 0, -1, -1
    
    # Initialize variables
    max_so_far = float('-inf')  # Global maximum
    max_ending_here = 0         # Maximum sum ending at current position
    start = 0                   # Start index of current subarray
    end = 0                     # End index of maximum subarray
    potential_start = 0         # Potential start index
    
    for i, num in enumerate(arr):
        # If max_ending_here becomes negative, reset it and update potential_start
        if max_ending_here + num < num:
            max_ending_here = num
            potential_start = i
        else:
            max_ending_here += num
        
        # Update global maximum and indices
        if max_ending_here > max_so_far:
            max_so_far = max_ending_here
            start = potential_start
            end = i
    
    return max_so_far, start, end

# Example usage
if __name__ == "__main__":
    # Example array
    arr = [-2, 1, -3, 4, -1, 2, 1, -5, 4]
    
    # Find maximum sum
    max_sum = kadanes_algorithm(arr)
    print(f"Maximum subarray sum: {max_sum}")
    
    # Find maximum sum and indices
    max_sum, start, end = kadanes_algorithm_with_indices(arr)
    print(f"Maximum subarray sum: {max_sum}")
    print(f"Maximum subarray: {arr[start:end+1]} (indices {start} to {end})")
    
    # Step-by-step demonstration
    def kadanes_algorithm_steps(arr):
        """
        Demonstrates Kadane's algorithm step by step
        """
        print("Array:", arr)
        print("\nStep-by-step execution of Kadane's algorithm:\n")
        
        max_so_far = float('-inf')
        max_ending_here = 0
        start = 0
        end = 0
        potential_start = 0
        
        print(f"{'Index':<6} {'Value':<6} {'max_ending_here':<16} {'max_so_far':<10} {'Current Subarray'}")
        print("-" * 60)
        
        for i, num in enumerate(arr):
            # Update max_ending_here
            if max_ending_here + num < num:
                max_ending_here = num
                potential_start = i
            else:
                max_ending_here += num
            
            # Update max_so_far
            if max_ending_here > max_so_far:
                max_so_far = max_ending_here
                start = potential_start
                end = i
            
            # Print current state
            print(f"{i:<6} {num:<6} {max_ending_here:<16} {max_so_far:<10} {arr[potential_start:i+1]}")
        
        print("\nFinal result:")
        print(f"Maximum subarray sum: {max_so_far}")
        print(f"Maximum subarray: {arr[start:end+1]} (indices {start} to {end})")
    
    # Demonstrate step by step
    kadanes_algorithm_steps(arr)"##;

pub const COUNTING_SORT: &str = r##"def counting_sort(arr):
    """
    Sorts an array using the counting sort algorithm
    """
    # Find the maximum value in the array
    max_val = max(arr) if arr else 0
    
    # Initialize counting array with zeros
    count = [0] * (max_val + 1)
    
    # Count occurrences of each element
    for num in arr:
        count[num] += 1
    
    # Modify count array to store cumulative count
    for i in range(1, len(count)):
        count[i] += count[i - 1]
    
    # Build the output array
    output = [0] * len(arr)
    for num in reversed(arr):  # Process in reverse to maintain stability
        output[count[num] - 1] = num
        count[num] -= 1
    
    return output

# Example usage
if __name__ == "__main__":
    # Example array
    arr = [4, 2, 2, 8, 3, 3, 1, 0, 5, 7, 6, 2]
    
    print("Original array:", arr)
    sorted_arr = counting_sort(arr)
    print("Sorted array:", sorted_arr)
    
    # Step-by-step demonstration
    def counting_sort_steps(arr):
        """
        Demonstrates counting sort step by step
        """
        print("Original array:", arr)
        
        # Find the maximum value
        max_val = max(arr) if arr else 0
        print(f"\nMaximum value: {max_val}")
        
        # Initialize counting array
        count = [0] * (max_val + 1)
        print(f"Initial count array: {count}")
        
        # Count occurrences
        print("\nCounting occurrences:")
        for i, num in enumerate(arr):
            count[num] += 1
            print(f"  After processing {num}: {count}")
        
        # Modify count array to store cumulative count
        print("\nModifying count array to store cumulative count:")
        for i in range(1, len(count)):
            count[i] += count[i - 1]
            print(f"  After adding count[{i-1}] to count[{i}]: {count}")
        
        # Build the output array
        output = [0] * len(arr)
        print("\nBuilding output array:")
        for i, num in reversed(list(enumerate(arr))):
            output[count[num] - 1] = num
            count[num] -= 1
            print(f"  Place {num} at position {count[num]}: {output}")
        
        print("\nFinal sorted array:", output)
    
    # Demonstrate step by step
    counting_sort_steps(arr)"##;

pub const MIN_HEAP: &str = r##"class MinHeap:
    def __init__(self):
        """
        Initialize an empty min heap
        """
        self.heap = []
    
    def parent(self, i):
        """
        Return the parent index of index i
        """
        return (i - 1) // 2
    
    def left_child(self, i):
        """
        Return the left child index of index i
        """
        return 2 * i + 1
    
    def right_child(self, i):
        """
        Return the right child index of index i
        """
        return 2 * i + 2
    
    def get_min(self):
        """
        Return the minimum element (root) without removing it
        """
        if not self.heap:
            return None
        return self.heap[0]
    
    def insert(self, key):
        """
        Insert a new key into the min heap
        """
        # Append the new key to the end of the heap
        self.heap.append(key)
        
        # Fix the min heap property if it is violated
        current = len(self.heap) - 1
        
        # Bubble up: Compare with parent and swap if needed
        while current > 0 and self.heap[self.parent(current)] > self.heap[current]:
            # Swap with parent
            self.heap[current], self.heap[self.parent(current)] = self.heap[self.parent(current)], self.heap[current]
            current = self.parent(current)
    
    def heapify(self, i):
        """
        Heapify subtree rooted at index i
        """
        smallest = i
        left = self.left_child(i)
        right = self.right_child(i)
        
        # Check if left child exists and is smaller than root
        if left < len(self.heap) and self.heap[left] < self.heap[smallest]:
            smallest = left
        
        # Check if right child exists and is smaller than smallest so far
        if right < len(self.heap) and self.heap[right] < self.heap[smallest]:
            smallest = right
        
        # If smallest is not the root, swap and continue heapifying
        if smallest != i:
            self.heap[i], self.heap[smallest] = self.heap[smallest], self.heap[i]
            self.heapify(smallest)
    
    def extract_min(self):
        """
        Remove and return the minimum element
        """
        if not self.heap:
            return None
        
        # Store the minimum value to return
        min_val = self.heap[0]
        
        # Replace root with last element
        self.heap[0] = self.heap[-1]
        self.heap.pop()
        
        # Heapify the root
        if self.heap:
            self.heapify(0)
        
        return min_val
    
    def decrease_key(self, i, new_val):
        """
        Decrease the value of key at index i to new_val
        """
        if i >= len(self.heap) or new_val > self.heap[i]:
            return
        
        self.heap[i] = new_val
        
        # Bubble up if needed
        while i > 0 and self.heap[self.parent(i)] > self.heap[i]:
            self.heap[i], self.heap[self.parent(i)] = self.heap[self.parent(i)], self.heap[i]
            i = self.parent(i)
    
    def delete_key(self, i):
        """
        Delete key at index i
        """
        # Set the key to negative infinity and bubble up to root
        self.decrease_key(i, float('-inf'))
        
        # Extract the minimum (which is now the key we wanted to delete)
        self.extract_min()
    
    def __str__(self):
        """
        String representation of the heap
        """
        return str(self.heap)

# Example usage
if __name__ == "__main__":
    # Create a min heap
    min_heap = MinHeap()
    
    # Insert elements
    elements = [15, 10, 20, 30, 40, 50, 60]
    for element in elements:
        min_heap.insert(element)
        print(f"After inserting {element}: {min_heap}")
    
    # Extract minimum elements
    print("\nExtracting minimum elements:")
    while min_heap.heap:
        min_val = min_heap.extract_min()
        print(f"Extracted {min_val}, Remaining heap: {min_heap}")"##;

pub const MAX_HEAP: &str = r##"class MaxHeap:
    def __init__(self):
        """
        Initialize an empty max heap
        """
        self.heap = []
    
    def parent(self, i):
        """
        Return the parent index of index i
        """
        return (i - 1) // 2
    
    def left_child(self, i):
        """
        Return the left child index of index i
        """
        return 2 * i + 1
    
    def right_child(self, i):
        """
        Return the right child index of index i
        """
        return 2 * i + 2
    
    def get_max(self):
        """
        Return the maximum element (root) without removing it
        """
        if not self.heap:
            return None
        return self.heap[0]
    
    def insert(self, key):
        """
        Insert a new key into the max heap
        """
        # Append the new key to the end of the heap
        self.heap.append(key)
        
        # Fix the max heap property if it is violated
        current = len(self.heap) - 1
        
        # Bubble up: Compare with parent and swap if needed
        while current > 0 and self.heap[self.parent(current)] < self.heap[current]:
            # Swap with parent
            self.heap[current], self.heap[self.parent(current)] = self.heap[self.parent(current)], self.heap[current]
            current = self.parent(current)
    
    def heapify(self, i):
        """
        Heapify subtree rooted at index i
        """
        largest = i
        left = self.left_child(i)
        right = self.right_child(i)
        
        # Check if left child exists and is larger than root
        if left < len(self.heap) and self.heap[left] > self.heap[largest]:
            largest = left
        
        # Check if right child exists and is larger than largest so far
        if right < len(self.heap) and self.heap[right] > self.heap[largest]:
            largest = right
        
        # If largest is not the root, swap and continue heapifying
        if largest != i:
            self.heap[i], self.heap[largest] = self.heap[largest], self.heap[i]
            self.heapify(largest)
    
    def extract_max(self):
        """
        Remove and return the maximum element
        """
        if not self.heap:
            return None
        
        # Store the maximum value to return
        max_val = self.heap[0]
        
        # Replace root with last element
        self.heap[0] = self.heap[-1]
        self.heap.pop()
        
        # Heapify the root
        if self.heap:
            self.heapify(0)
        
        return max_val
    
    def increase_key(self, i, new_val):
        """
        Increase the value of key at index i to new_val
        """
        if i >= len(self.heap) or new_val < self.heap[i]:
            return
        
        self.heap[i] = new_val
        
        # Bubble up if needed
        while i > 0 and self.heap[self.parent(i)] < self.heap[i]:
            self.heap[i], self.heap[self.parent(i)] = self.heap[self.parent(i)], self.heap[i]
            i = self.parent(i)
    
    def delete_key(self, i):
        """
        Delete key at index i
        """
        # Set the key to infinity and bubble up to root
        self.increase_key(i, float('inf'))
        
        # Extract the maximum (which is now the key we wanted to delete)
        self.extract_max()
    
    def __str__(self):
        """
        String representation of the heap
        """
        return str(self.heap)

# Example usage
if __name__ == "__main__":
    # Create a max heap
    max_heap = MaxHeap()
    
    # Insert elements
    elements = [60, 50, 40, 30, 20, 10, 5]
    for element in elements:
        max_heap.insert(element)
        print(f"After inserting {element}: {max_heap}")
    
    # Extract maximum elements
    print("\nExtracting maximum elements:")
    while max_heap.heap:
        max_val = max_heap.extract_max()
        print(f"Extracted {max_val}, Remaining heap: {max_heap}")"##;

pub const DUTCH_NATIONAL_FLAG: &str = r##"def dutch_national_flag(arr):
    """
    Sorts an array containing only 0s, 1s, and 2s using the Dutch National Flag algorithm
    """
    low = 0        # Pointer for 0s (elements < pivot)
    mid = 0        # Current element being processed
    high = len(arr) - 1  # Pointer for 2s (elements > pivot)
    
    # Pivot is 1
    while mid <= high:
        if arr[mid] == 0:
            # Swap current element with the low pointer
            arr[low], arr[mid] = arr[mid], arr[low]
            low += 1
            mid += 1
        elif arr[mid] == 1:
            # Current element is already in the right place
            mid += 1
        else:  # arr[mid] == 2
            # Swap current element with the high pointer
            arr[mid], arr[high] = arr[high], arr[mid]
            high -= 1
            # Note: mid is not incremented here because we need to check the swapped element
    
    return arr

# Example usage
if __name__ == "__main__":
    # Example array with 0s, 1s, and 2s
    arr = [2, 0, 1, 1, 0, 2, 0, 1, 2, 0, 1, 2]
    
    print("Original array:", arr)
    sorted_arr = dutch_national_flag(arr.copy())
    print("Sorted array:", sorted_arr)
    
    # Step-by-step demonstration
    def dutch_national_flag_steps(arr):
        """
        Demonstrates Dutch National Flag algorithm step by step
        """
        print("Original array:", arr)
        print("\nStep-by-step execution of Dutch National Flag algorithm:\n")
        
        low = 0
        mid = 0
        high = len(arr) - 1
        
        print(f"{'Step':<6} {'Action':<20} {'Array':<30} {'low':<5} {'mid':<5} {'high':<5}")
        print("-" * 75)
        
        step = 1
        while mid <= high:
            if arr[mid] == 0:
                print(f"{step:<6} {'Swap mid with low':<20} {arr[:mid] + ['[' + str(arr[mid]) + ']'] + arr[mid+1:]:<30} {low:<5} {mid:<5} {high:<5}")
                arr[low], arr[mid] = arr[mid], arr[low]
                print(f"{'':<6} {'After swap':<20} {arr:<30} {low:<5} {mid:<5} {high:<5}")
                low += 1
                mid += 1
            elif arr[mid] == 1:
                print(f"{step:<6} {'Keep mid as is':<20} {arr[:mid] + ['[' + str(arr[mid]) + ']'] + arr[mid+1:]:<30} {low:<5} {mid:<5} {high:<5}")
                mid += 1
            else:  # arr[mid] == 2
                print(f"{step:<6} {'Swap mid with high':<20} {arr[:mid] + ['[' + str(arr[mid]) + ']'] + arr[mid+1:]:<30} {low:<5} {mid:<5} {high:<5}")
                arr[mid], arr[high] = arr[high], arr[mid]
                print(f"{'':<6} {'After swap':<20} {arr:<30} {low:<5} {mid:<5} {high:<5}")
                high -= 1
            
            step += 1
        
        print("\nFinal sorted array:", arr)
    
    # Demonstrate step by step
    dutch_national_flag_steps(arr.copy())"##;

pub const BIT_MANIPULATION: &str = r##"def count_set_bits(n):
    """
    Count the number of set bits (1s) in the binary representation of n
    """
    count = 0
    while n:
        count += n & 1  # Check if the least significant bit is 1
        n >>= 1         # Right shift by 1 (divide by 2)
    return count

def is_power_of_two(n):
    """
    Check if n is a power of 2 using bit manipulation
    """
    if n <= 0:
        return False
    # A power of 2 has only one bit set, so n & (n-1) will be 0
    return (n & (n - 1)) == 0

def get_bit(n, i):
    """
    Get the value of the bit at position i in n
    """
    return (n >> i) & 1

def set_bit(n, i):
    """
    Set the bit at position i in n to 1
    """
    return n | (1 << i)

def clear_bit(n, i):
    """
    Clear the bit at position i in n (set to 0)
    """
    return n & ~(1 << i)

def toggle_bit(n, i):
    """
    Toggle the bit at position i in n
    """
    return n ^ (1 << i)

def find_single_number(nums):
    """
    Find the single number in an array where all other numbers appear twice
    Using XOR operation
    """
    result = 0
    for num in nums:
        result ^= num
    return result

def swap_without_temp(a, b):
    """
    Swap two numbers without using a temporary variable
    """
    a = a ^ b
    b = a ^ b
    a = a ^ b
    return a, b

# Example usage
if __name__ == "__main__":
    # Count set bits
    n = 42  # Binary: 101010
    print(f"Number of set bits in {n}: {count_set_bits(n)}")
    
    # Check if power of 2
    print(f"Is {n} a power of 2? {is_power_of_two(n)}")
    print(f"Is 64 a power of 2? {is_power_of_two(64)}")
    
    # Get, set, clear, toggle bits
    print(f"Bit at position 3 in {n}: {get_bit(n, 3)}")
    print(f"Setting bit at position 2 in {n}: {set_bit(n, 2)}")
    print(f"Clearing bit at position 1 in {n}: {clear_bit(n, 1)}")
    print(f"Toggling bit at position 5 in {n}: {toggle_bit(n, 5)}")
    
    # Find single number
    nums = [4, 1, 2, 1, 2]
    print(f"Single number in {nums}: {find_single_number(nums)}")
    
    # Swap without temp
    a, b = 10, 20
    print(f"Before swap: a = {a}, b = {b}")
    a, b = swap_without_temp(a, b)
    print(f"After swap: a = {a}, b = {b}")"##;

pub const GREEDY: &str = r##"def activity_selection(start, finish):
    """
    Activity Selection Problem: Select the maximum number of activities that don't overlap
    
    Args:
        start: List of start times
        finish: List of finish times
    
    Returns:
        List of selected activities (indices)
    """
    # Create a list of activities with their start and finish times
    activities = [(start[i], finish[i], i) for i in range(len(start))]
    
    # Sort activities by finish time
    activities.sort(key=lambda x: x[1])
    
    # Select the first activity
    selected = [activities[0][2]]
    last_finish_time = activities[0][1]
    
    # Consider the rest of the activities
    for i in range(1, len(activities)):
        # If this activity starts after the finish time of the last selected activity
        if activities[i][0] >= last_finish_time:
            # Select this activity
            selected.append(activities[i][2])
            last_finish_time = activities[i][1]
    
    return selected

def fractional_knapsack(values, weights, capacity):
    """
    Fractional Knapsack Problem: Fill a knapsack with fractions of items to maximize value
    
    Args:
        values: List of values of items
        weights: List of weights of items
        capacity: Maximum weight capacity of knapsack
    
    Returns:
        Maximum value and selected items with fractions
    """
    # Create a list of items with their value-to-weight ratios
    items = [(values[i] / weights[i], values[i], weights[i], i) for i in range(len(values))]
    
    # Sort items by value-to-weight ratio in descending order
    items.sort(reverse=True)
    
    total_value = 0
    selected_items = []
    
    for ratio, value, weight, index in items:
        if capacity >= weight:
            # Take the whole item
            total_value += value
            capacity -= weight
            selected_items.append((index, 1.0))  # 1.0 means 100% of the item
        else:
            # Take a fraction of the item
            fraction = capacity / weight
            total_value += value * fraction
            selected_items.append((index, fraction))
            break  # Knapsack is full
    
    return total_value, selected_items

def coin_change_greedy(coins, amount):
    """
    Coin Change Problem (Greedy approach): Find minimum number of coins to make a given amount
    Note: This greedy approach works only for certain coin systems (like US coins)
    
    Args:
        coins: List of coin denominations
        amount: Target amount
    
    Returns:
        List of coins used
    """
    # Sort coins in descending order
    coins.sort(reverse=True)
    
    result = []
    remaining = amount
    
    for coin in coins:
        # Use as many of the current coin as possible
        while remaining >= coin:
            result.append(coin)
            remaining -= coin
    
    # Check if we were able to make the amount
    if remaining == 0:
        return result
    else:
        return None  # Not possible with the given coins

# Example usage
if __name__ == "__main__":
    # Activity Selection Problem
    start_times = [1, 3, 0, 5, 8, 5]
    finish_times = [2, 4, 6, 7, 9, 9]
    
    selected_activities = activity_selection(start_times, finish_times)
    print("Selected activities:", selected_activities)
    
    # Fractional Knapsack Problem
    item_values = [60, 100, 120]
    item_weights = [10, 20, 30]
    knapsack_capacity = 50
    
    max_value, selected_items = fractional_knapsack(item_values, item_weights, knapsack_capacity)
    print(f"Maximum value: {max_value}")
    print("Selected items (index, fraction):", selected_items)
    
    # Coin Change Problem (Greedy approach)
    coin_denominations = [25, 10, 5, 1]  # US coins: quarter, dime, nickel, penny
    target_amount = 63
    
    coins_used = coin_change_greedy(coin_denominations, target_amount)
    print(f"Coins used to make {target_amount} cents:", coins_used)"##;
